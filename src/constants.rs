// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Fixed names and markers of the LVC waveform format.
 */

/// Name of the time-grid dataset, matched case-insensitively at any depth.
pub(crate) const NR_TIME_KEY: &str = "nrtimes";

/// Prefix of amplitude mode groups, e.g. "amp_l2_m-2".
pub(crate) const AMP_GROUP_PREFIX: &str = "amp_l";

/// Prefix of phase mode groups, e.g. "phase_l2_m-2".
pub(crate) const PHASE_GROUP_PREFIX: &str = "phase_l";

/// Separator between the ell and m fields of a mode group name.
pub(crate) const MODE_M_SEPARATOR: &str = "_m";

/// Group holding optional free-form provenance records.
pub(crate) const AUX_INFO_GROUP: &str = "auxiliary-info";

/// Dataset under [`AUX_INFO_GROUP`] with newline-delimited history text.
pub(crate) const HISTORY_DATASET: &str = "history.txt";

/// Prefix marking quoted history lines in the output record.
pub(crate) const HISTORY_MARKER: &str = "### ";

/// The biggest spline degree the format allows for `deg`.
pub(crate) const MAX_SPLINE_DEGREE: usize = 5;

/// Environment variable consulted by [`crate::lvc::read_from_env`].
pub(crate) const LVC_WAVEFORM_FILE_VAR: &str = "LVC_WAVEFORM_FILE";

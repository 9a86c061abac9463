// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code to read numerical-relativity gravitational waveforms stored in the LVC
HDF5 format.
 */

mod constants;
pub mod lvc;
pub mod modes;
pub mod spline;
pub mod waveform;

pub use lvc::{read_from_env, read_from_file, LvcReadError, ReadOptions};
pub use waveform::{DataType, FrameType, WaveformModes};

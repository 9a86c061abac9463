// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The assembled waveform record.

use ndarray::prelude::*;
use num_complex::Complex64 as c64;
use thiserror::Error;

use crate::modes::{lm_index, lm_total_size};

#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("Data matrix has {rows} rows, but the time grid has {times} samples")]
    RowCountMismatch { rows: usize, times: usize },

    #[error(
        "Data matrix has {cols} columns, but ell range {ell_min}..={ell_max} spans {expected} modes"
    )]
    ColumnCountMismatch {
        cols: usize,
        expected: usize,
        ell_min: i32,
        ell_max: i32,
    },

    #[error("Invalid ell range {ell_min}..={ell_max}")]
    BadEllRange { ell_min: i32, ell_max: i32 },
}

/// Physical reference frame of a waveform record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Unknown,
    Inertial,
    Coprecessing,
    Coorbital,
    Corotating,
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FrameType::Unknown => "unknown",
                FrameType::Inertial => "inertial",
                FrameType::Coprecessing => "coprecessing",
                FrameType::Coorbital => "coorbital",
                FrameType::Corotating => "corotating",
            }
        )
    }
}

/// Physical quantity represented by a waveform record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Unknown,
    Strain,
    StrainDot,
    News,
    Psi4,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DataType::Unknown => "unknown",
                DataType::Strain => "strain",
                DataType::StrainDot => "hdot",
                DataType::News => "news",
                DataType::Psi4 => "psi4",
            }
        )
    }
}

/// A time series of complex spherical-harmonic mode amplitudes, together
/// with the metadata describing what the series represents. Constructed once
/// by a reader and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct WaveformModes {
    /// Strictly increasing timestamps shared by every mode.
    t: Array1<f64>,
    /// One row per timestamp, one column per (ell, m) in canonical order.
    data: Array2<c64>,
    ell_min: i32,
    ell_max: i32,
    frame_type: FrameType,
    data_type: DataType,
    /// Free-form provenance lines; at least one entry, possibly empty.
    history: Vec<String>,
    /// The call that produced this record.
    constructor_statement: String,
    r_is_scaled_out: bool,
    m_is_scaled_out: bool,
}

impl WaveformModes {
    /// Assemble a record, checking that the pieces fit together: the data
    /// matrix must have one row per timestamp and one column per mode of the
    /// rectangular ell range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t: Array1<f64>,
        data: Array2<c64>,
        ell_min: i32,
        ell_max: i32,
        frame_type: FrameType,
        data_type: DataType,
        history: Vec<String>,
        constructor_statement: String,
        r_is_scaled_out: bool,
        m_is_scaled_out: bool,
    ) -> Result<Self, WaveformError> {
        if ell_min < 0 || ell_min > ell_max {
            return Err(WaveformError::BadEllRange { ell_min, ell_max });
        }
        if data.nrows() != t.len() {
            return Err(WaveformError::RowCountMismatch {
                rows: data.nrows(),
                times: t.len(),
            });
        }
        let expected = lm_total_size(ell_min, ell_max);
        if data.ncols() != expected {
            return Err(WaveformError::ColumnCountMismatch {
                cols: data.ncols(),
                expected,
                ell_min,
                ell_max,
            });
        }

        Ok(Self {
            t,
            data,
            ell_min,
            ell_max,
            frame_type,
            data_type,
            history,
            constructor_statement,
            r_is_scaled_out,
            m_is_scaled_out,
        })
    }

    /// The common time grid.
    pub fn t(&self) -> &Array1<f64> {
        &self.t
    }

    /// The mode data matrix: one row per timestamp, one column per (ell, m).
    pub fn data(&self) -> &Array2<c64> {
        &self.data
    }

    pub fn ell_min(&self) -> i32 {
        self.ell_min
    }

    pub fn ell_max(&self) -> i32 {
        self.ell_max
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn constructor_statement(&self) -> &str {
        &self.constructor_statement
    }

    /// Whether the extraction radius has been scaled out of the data.
    pub fn r_is_scaled_out(&self) -> bool {
        self.r_is_scaled_out
    }

    /// Whether the total mass has been scaled out of the data.
    pub fn m_is_scaled_out(&self) -> bool {
        self.m_is_scaled_out
    }

    pub fn num_times(&self) -> usize {
        self.t.len()
    }

    pub fn num_modes(&self) -> usize {
        self.data.ncols()
    }

    /// The column index of mode (ell, m), if it lies in this record's range.
    pub fn mode_index(&self, ell: i32, m: i32) -> Option<usize> {
        if ell < self.ell_min || ell > self.ell_max || m.abs() > ell {
            return None;
        }
        Some(lm_index(ell, m, self.ell_min))
    }

    /// The time series of one mode.
    pub fn mode(&self, ell: i32, m: i32) -> Option<ArrayView1<'_, c64>> {
        self.mode_index(ell, m).map(|i| self.data.column(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(t_len: usize, num_modes: usize) -> Result<WaveformModes, WaveformError> {
        WaveformModes::new(
            Array1::linspace(0.0, 1.0, t_len),
            Array2::zeros((t_len, num_modes)),
            2,
            2,
            FrameType::Inertial,
            DataType::Strain,
            vec![String::new()],
            "test".to_string(),
            true,
            true,
        )
    }

    #[test]
    fn accepts_matching_shapes() {
        assert!(record(4, 5).is_ok());
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let err = WaveformModes::new(
            Array1::linspace(0.0, 1.0, 3),
            Array2::zeros((4, 5)),
            2,
            2,
            FrameType::Inertial,
            DataType::Strain,
            vec![String::new()],
            "test".to_string(),
            true,
            true,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            WaveformError::RowCountMismatch { rows: 4, times: 3 }
        ));

        assert!(matches!(
            record(4, 4),
            Err(WaveformError::ColumnCountMismatch {
                cols: 4,
                expected: 5,
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_ell_ranges() {
        let make = |ell_min, ell_max| {
            WaveformModes::new(
                Array1::linspace(0.0, 1.0, 4),
                Array2::zeros((4, 5)),
                ell_min,
                ell_max,
                FrameType::Inertial,
                DataType::Strain,
                vec![String::new()],
                "test".to_string(),
                true,
                true,
            )
        };
        assert!(matches!(make(3, 2), Err(WaveformError::BadEllRange { .. })));
        assert!(matches!(
            make(-1, 2),
            Err(WaveformError::BadEllRange { .. })
        ));
    }

    #[test]
    fn mode_lookup() {
        let w = record(4, 5).unwrap();
        assert_eq!(w.mode_index(2, -2), Some(0));
        assert_eq!(w.mode_index(2, 2), Some(4));
        assert_eq!(w.mode_index(3, 0), None);
        assert_eq!(w.mode_index(2, 3), None);
        assert_eq!(w.mode(2, 0).unwrap().len(), 4);
        assert!(w.mode(1, 0).is_none());
    }

    #[test]
    fn tag_labels() {
        assert_eq!(FrameType::Inertial.to_string(), "inertial");
        assert_eq!(DataType::Strain.to_string(), "strain");
        assert_eq!(DataType::Psi4.to_string(), "psi4");
    }
}

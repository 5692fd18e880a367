use serde::{Deserialize, Serialize};
use std::fmt;

/// Cohort label assigned to a student by roll-number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Batch {
    A,
    B,
    C,
    D,
}

impl Batch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Batch::A => "A",
            Batch::B => "B",
            Batch::C => "C",
            Batch::D => "D",
        }
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct PartitionError {
    message: String,
}

impl PartitionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PartitionError {}

/// One labeled roll-number range, inclusive of both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub label: Batch,
    pub from: u32,
    pub to: u32,
}

impl Band {
    pub fn new(label: Batch, from: u32, to: u32) -> Self {
        Self { label, from, to }
    }
}

/// Contiguous, gapless, non-overlapping partition of a roll-number domain
/// into labeled bands. Rolls outside every band resolve to no batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandPartition {
    bands: Vec<Band>,
}

impl BandPartition {
    pub fn new(bands: Vec<Band>) -> Result<Self, PartitionError> {
        let partition = Self { bands };
        partition.validate()?;
        Ok(partition)
    }

    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.bands.is_empty() {
            return Err(PartitionError::new("partition requires at least one band"));
        }
        let mut seen_labels = Vec::with_capacity(self.bands.len());
        let mut previous_end: Option<u32> = None;
        for band in &self.bands {
            if band.from == 0 {
                return Err(PartitionError::new(format!(
                    "band {} must start at roll 1 or later",
                    band.label
                )));
            }
            if band.from > band.to {
                return Err(PartitionError::new(format!(
                    "band {} has inverted range {}..{}",
                    band.label, band.from, band.to
                )));
            }
            if seen_labels.contains(&band.label) {
                return Err(PartitionError::new(format!(
                    "band label {} appears more than once",
                    band.label
                )));
            }
            seen_labels.push(band.label);
            if let Some(end) = previous_end {
                if band.from != end + 1 {
                    return Err(PartitionError::new(format!(
                        "band {} starts at {} but the previous band ends at {} \
                         (bands must be contiguous and gapless)",
                        band.label, band.from, end
                    )));
                }
            }
            previous_end = Some(band.to);
        }
        Ok(())
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// First and last roll number covered by the partition.
    pub fn domain(&self) -> (u32, u32) {
        let first = self.bands.first().map(|band| band.from).unwrap_or(0);
        let last = self.bands.last().map(|band| band.to).unwrap_or(0);
        (first, last)
    }

    pub fn batch_for(&self, roll_no: u32) -> Option<Batch> {
        self.bands
            .iter()
            .find(|band| roll_no >= band.from && roll_no <= band.to)
            .map(|band| band.label)
    }
}

/// The clinic and general partitions are configured independently and may
/// use different boundaries and a different number of bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub clinic: BandPartition,
    pub general: BandPartition,
}

impl BatchConfig {
    pub fn new(clinic: BandPartition, general: BandPartition) -> Self {
        Self { clinic, general }
    }

    pub fn validate(&self) -> Result<(), PartitionError> {
        self.clinic.validate()?;
        self.general.validate()?;
        Ok(())
    }

    pub fn clinic_batch(&self, roll_no: u32) -> Option<Batch> {
        self.clinic.batch_for(roll_no)
    }

    pub fn general_batch(&self, roll_no: u32) -> Option<Batch> {
        self.general.batch_for(roll_no)
    }
}

impl Default for BatchConfig {
    /// Production partitions: clinic units of 38 rolls, general batches of 50.
    fn default() -> Self {
        Self {
            clinic: BandPartition {
                bands: vec![
                    Band::new(Batch::A, 1, 38),
                    Band::new(Batch::B, 39, 76),
                    Band::new(Batch::C, 77, 114),
                    Band::new(Batch::D, 115, 148),
                ],
            },
            general: BandPartition {
                bands: vec![
                    Band::new(Batch::A, 1, 50),
                    Band::new(Batch::B, 51, 100),
                    Band::new(Batch::C, 101, 148),
                ],
            },
        }
    }
}

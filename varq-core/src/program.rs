//! Circuit programs: the op list forward evaluators execute
//!
//! A [`CircuitProgram`] is the narrow contract between a model and its
//! evaluators: an ordered sequence of rotations (from the classical encoder
//! and the trainable layer, at concrete angle values) plus fixed entangling
//! gates. It is serializable so the remote processor path can ship it as a
//! job payload.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Rotation generator axis
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationAxis::X => write!(f, "rx"),
            RotationAxis::Y => write!(f, "ry"),
            RotationAxis::Z => write!(f, "rz"),
        }
    }
}

/// One operation in a circuit program
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ProgramOp {
    /// Single-wire Pauli rotation by a concrete angle
    Rotation {
        axis: RotationAxis,
        wire: usize,
        angle: f64,
    },
    /// Fixed two-wire entangler
    ControlledNot { control: usize, target: usize },
}

/// An executable circuit description over a fixed number of wires
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircuitProgram {
    num_wires: usize,
    ops: Vec<ProgramOp>,
}

impl CircuitProgram {
    /// Create an empty program
    ///
    /// # Errors
    /// Returns an error if `num_wires` is zero.
    pub fn new(num_wires: usize) -> Result<Self> {
        if num_wires == 0 {
            return Err(CoreError::ValidationError(
                "Program must have at least one wire".to_string(),
            ));
        }
        Ok(Self {
            num_wires,
            ops: Vec::new(),
        })
    }

    /// Create an empty program with op capacity pre-allocated
    pub fn with_capacity(num_wires: usize, capacity: usize) -> Result<Self> {
        let mut program = Self::new(num_wires)?;
        program.ops.reserve(capacity);
        Ok(program)
    }

    fn check_wire(&self, wire: usize) -> Result<()> {
        if wire >= self.num_wires {
            return Err(CoreError::InvalidWire {
                wire,
                num_wires: self.num_wires,
            });
        }
        Ok(())
    }

    /// Append a single-wire rotation
    pub fn rotation(&mut self, axis: RotationAxis, wire: usize, angle: f64) -> Result<()> {
        self.check_wire(wire)?;
        self.ops.push(ProgramOp::Rotation { axis, wire, angle });
        Ok(())
    }

    /// Append a CNOT entangler
    ///
    /// # Errors
    /// Returns an error if either wire is out of range or control equals
    /// target.
    pub fn controlled_not(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_wire(control)?;
        self.check_wire(target)?;
        if control == target {
            return Err(CoreError::DuplicateWire(control));
        }
        self.ops.push(ProgramOp::ControlledNot { control, target });
        Ok(())
    }

    /// Number of wires
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// The ordered op sequence
    #[inline]
    pub fn ops(&self) -> &[ProgramOp] {
        &self.ops
    }

    /// Number of ops
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program has no ops
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

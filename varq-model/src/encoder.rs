//! Classical-data encoding as rotation angles

use varq_core::{CircuitProgram, CoreError, Result, RotationAxis};

/// Axis order of the four encoding sub-layers (ry, rz, rx, ry)
const SUBLAYER_AXES: [RotationAxis; 4] = [
    RotationAxis::Y,
    RotationAxis::Z,
    RotationAxis::X,
    RotationAxis::Y,
];

/// Encodes one feature row as rotation gates
///
/// Each of the four sub-layers applies one rotation per wire, so a row must
/// carry `4 * num_wires` features. Feature `k` of sub-layer `l` becomes the
/// rotation angle on wire `k`, giving the fixed op order
/// RY(w0..wn) RZ(w0..wn) RX(w0..wn) RY(w0..wn).
#[derive(Debug, Clone)]
pub struct AngleEncoder {
    num_wires: usize,
}

impl AngleEncoder {
    /// Create an encoder over `num_wires` wires
    pub fn new(num_wires: usize) -> Self {
        Self { num_wires }
    }

    /// Number of wires
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// Number of features consumed per input row
    #[inline]
    pub fn feature_dim(&self) -> usize {
        SUBLAYER_AXES.len() * self.num_wires
    }

    /// Append the encoding rotations for one feature row
    ///
    /// # Errors
    /// Returns a shape mismatch if the row does not carry exactly
    /// [`feature_dim`](AngleEncoder::feature_dim) features.
    pub fn encode(&self, features: &[f64], program: &mut CircuitProgram) -> Result<()> {
        if features.len() != self.feature_dim() {
            return Err(CoreError::shape_mismatch(
                format!("{} features", self.feature_dim()),
                format!("{} features", features.len()),
            ));
        }
        for (layer, &axis) in SUBLAYER_AXES.iter().enumerate() {
            for wire in 0..self.num_wires {
                program.rotation(axis, wire, features[layer * self.num_wires + wire])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varq_core::ProgramOp;

    #[test]
    fn test_feature_dim() {
        assert_eq!(AngleEncoder::new(4).feature_dim(), 16);
        assert_eq!(AngleEncoder::new(1).feature_dim(), 4);
    }

    #[test]
    fn test_encoding_op_order() {
        let encoder = AngleEncoder::new(2);
        let features = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        let mut program = CircuitProgram::new(2).unwrap();
        encoder.encode(&features, &mut program).unwrap();

        assert_eq!(program.len(), 8);
        // First sub-layer: RY on each wire with the first two features
        assert_eq!(
            program.ops()[0],
            ProgramOp::Rotation {
                axis: RotationAxis::Y,
                wire: 0,
                angle: 0.1
            }
        );
        assert_eq!(
            program.ops()[1],
            ProgramOp::Rotation {
                axis: RotationAxis::Y,
                wire: 1,
                angle: 0.2
            }
        );
        // Second sub-layer switches to RZ
        assert_eq!(
            program.ops()[2],
            ProgramOp::Rotation {
                axis: RotationAxis::Z,
                wire: 0,
                angle: 0.3
            }
        );
        // Third sub-layer is RX
        assert!(matches!(
            program.ops()[4],
            ProgramOp::Rotation {
                axis: RotationAxis::X,
                ..
            }
        ));
        // Fourth sub-layer returns to RY
        assert!(matches!(
            program.ops()[6],
            ProgramOp::Rotation {
                axis: RotationAxis::Y,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_feature_count_rejected() {
        let encoder = AngleEncoder::new(2);
        let mut program = CircuitProgram::new(2).unwrap();
        assert!(encoder.encode(&[0.1, 0.2], &mut program).is_err());
        // Nothing was appended
        assert!(program.is_empty());
    }
}

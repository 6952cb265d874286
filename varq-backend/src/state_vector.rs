//! Dense statevector simulation of circuit programs
//!
//! A compact dense representation: 2^n complex amplitudes with a
//! little-endian wire convention (wire `q` is bit `q` of the basis index).
//! Only the gate vocabulary of [`CircuitProgram`] is supported: single-wire
//! Pauli rotations and CNOT.

use crate::{EvaluatorError, Result};
use num_complex::Complex64;
use varq_core::{CircuitProgram, ProgramOp, RotationAxis};

/// Dense quantum state over a fixed number of wires
///
/// # Example
/// ```
/// use varq_backend::StateVector;
/// use varq_core::RotationAxis;
///
/// let mut state = StateVector::new(1).unwrap();
/// state.apply_rotation(RotationAxis::Y, 0, std::f64::consts::PI).unwrap();
/// // RY(pi)|0> = |1>
/// assert!((state.z_expectations()[0] + 1.0).abs() < 1e-12);
/// ```
pub struct StateVector {
    num_wires: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a state initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns an error if `num_wires` is zero.
    pub fn new(num_wires: usize) -> Result<Self> {
        if num_wires == 0 {
            return Err(EvaluatorError::InvalidProgram(
                "State must have at least one wire".to_string(),
            ));
        }
        let dimension = 1usize << num_wires;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            num_wires,
            amplitudes,
        })
    }

    /// Number of wires
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// Dimension of the state (2^num_wires)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Complex amplitudes in computational basis order
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    fn check_wire(&self, wire: usize) -> Result<()> {
        if wire >= self.num_wires {
            return Err(EvaluatorError::InvalidProgram(format!(
                "Wire {} out of range for {}-wire state",
                wire, self.num_wires
            )));
        }
        Ok(())
    }

    /// Apply a 2x2 unitary to one wire
    fn apply_single_wire(&mut self, matrix: &[[Complex64; 2]; 2], wire: usize) {
        let stride = 1usize << wire;
        for base in 0..self.amplitudes.len() {
            if base & stride == 0 {
                let paired = base | stride;
                let a0 = self.amplitudes[base];
                let a1 = self.amplitudes[paired];
                self.amplitudes[base] = matrix[0][0] * a0 + matrix[0][1] * a1;
                self.amplitudes[paired] = matrix[1][0] * a0 + matrix[1][1] * a1;
            }
        }
    }

    /// Apply a Pauli rotation by `angle` to `wire`
    pub fn apply_rotation(&mut self, axis: RotationAxis, wire: usize, angle: f64) -> Result<()> {
        self.check_wire(wire)?;
        let half = angle / 2.0;
        let (cos, sin) = (half.cos(), half.sin());
        let matrix = match axis {
            RotationAxis::X => [
                [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
                [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
            ],
            RotationAxis::Y => [
                [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
                [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
            ],
            RotationAxis::Z => [
                [Complex64::new(cos, -sin), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(cos, sin)],
            ],
        };
        self.apply_single_wire(&matrix, wire);
        Ok(())
    }

    /// Apply a CNOT gate
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_wire(control)?;
        self.check_wire(target)?;
        if control == target {
            return Err(EvaluatorError::InvalidProgram(format!(
                "CNOT control and target are both wire {}",
                control
            )));
        }
        let control_bit = 1usize << control;
        let target_bit = 1usize << target;
        for index in 0..self.amplitudes.len() {
            if index & control_bit != 0 && index & target_bit == 0 {
                self.amplitudes.swap(index, index | target_bit);
            }
        }
        Ok(())
    }

    /// Execute every op of a program in order
    pub fn apply_program(&mut self, program: &CircuitProgram) -> Result<()> {
        if program.num_wires() != self.num_wires {
            return Err(EvaluatorError::InvalidProgram(format!(
                "Program has {} wires, state has {}",
                program.num_wires(),
                self.num_wires
            )));
        }
        for op in program.ops() {
            match *op {
                ProgramOp::Rotation { axis, wire, angle } => {
                    self.apply_rotation(axis, wire, angle)?
                }
                ProgramOp::ControlledNot { control, target } => {
                    self.apply_cnot(control, target)?
                }
            }
        }
        Ok(())
    }

    /// Pauli-Z expectation value of every wire, in wire order
    ///
    /// ⟨Z_q⟩ = Σ_i |a_i|² · (+1 if bit q of i is 0, else −1)
    pub fn z_expectations(&self) -> Vec<f64> {
        let mut expectations = vec![0.0; self.num_wires];
        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            let probability = amplitude.norm_sqr();
            if probability == 0.0 {
                continue;
            }
            for (wire, expectation) in expectations.iter_mut().enumerate() {
                if index >> wire & 1 == 0 {
                    *expectation += probability;
                } else {
                    *expectation -= probability;
                }
            }
        }
        expectations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_initial_state() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.num_wires(), 3);
        assert_eq!(state.dimension(), 8);
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
        assert_eq!(state.z_expectations(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_ry_expectation_is_cosine() {
        for &theta in &[0.0, 0.3, 1.1, PI, -0.7] {
            let mut state = StateVector::new(1).unwrap();
            state.apply_rotation(RotationAxis::Y, 0, theta).unwrap();
            assert_relative_eq!(state.z_expectations()[0], theta.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rx_expectation_is_cosine() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_rotation(RotationAxis::X, 0, 0.9).unwrap();
        assert_relative_eq!(state.z_expectations()[0], 0.9_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_rz_preserves_basis_state() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_rotation(RotationAxis::Z, 0, 1.3).unwrap();
        assert_relative_eq!(state.z_expectations()[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_flips_target_when_control_set() {
        let mut state = StateVector::new(2).unwrap();
        // RY(pi) flips wire 0 to |1>
        state.apply_rotation(RotationAxis::Y, 0, PI).unwrap();
        state.apply_cnot(0, 1).unwrap();
        let z = state.z_expectations();
        assert_relative_eq!(z[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(z[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_entangled_pair_expectations() {
        // RY(pi/2) then CNOT produces (|00> + |11>)/sqrt(2)
        let mut state = StateVector::new(2).unwrap();
        state.apply_rotation(RotationAxis::Y, 0, FRAC_PI_2).unwrap();
        state.apply_cnot(0, 1).unwrap();

        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
        let z = state.z_expectations();
        assert_relative_eq!(z[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(z[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_program_execution() {
        let mut program = CircuitProgram::new(2).unwrap();
        program.rotation(RotationAxis::Y, 0, 0.4).unwrap();
        program.rotation(RotationAxis::Y, 1, 0.8).unwrap();

        let mut state = StateVector::new(2).unwrap();
        state.apply_program(&program).unwrap();
        let z = state.z_expectations();
        assert_relative_eq!(z[0], 0.4_f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(z[1], 0.8_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_program_wire_count_mismatch() {
        let program = CircuitProgram::new(3).unwrap();
        let mut state = StateVector::new(2).unwrap();
        assert!(state.apply_program(&program).is_err());
    }

    #[test]
    fn test_invalid_wire() {
        let mut state = StateVector::new(1).unwrap();
        assert!(state.apply_rotation(RotationAxis::X, 1, 0.1).is_err());
        assert!(StateVector::new(0).is_err());
    }
}

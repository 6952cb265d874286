//! Trainable entangling layers

use varq_core::{CircuitProgram, ParameterId, ParameterRegistry, Result, RotationAxis};

/// Architecture of the variational layer stack
#[derive(Debug, Clone, Copy)]
pub struct LayerArch {
    /// Number of wires
    pub num_wires: usize,
    /// Number of repeated blocks
    pub num_blocks: usize,
    /// Rotation layers per block (alternating RY, RZ)
    pub layers_per_block: usize,
}

impl Default for LayerArch {
    fn default() -> Self {
        Self {
            num_wires: 4,
            num_blocks: 2,
            layers_per_block: 2,
        }
    }
}

impl LayerArch {
    /// Total number of trainable rotation angles
    pub fn num_parameters(&self) -> usize {
        self.num_wires * self.num_blocks * self.layers_per_block
    }
}

/// A stack of trainable rotation layers with fixed CNOT ring entanglers
///
/// Each block contributes `layers_per_block` rotation layers (one trainable
/// angle per wire, axis alternating RY then RZ) followed by a ring of CNOT
/// gates. Every trainable gate is a Pauli rotation, so the two-term
/// parameter-shift rule applies exactly to all of this layer's parameters.
///
/// Parameters are registered in a fixed order (block-major, then layer, then
/// wire) and that order determines their position in gradient sequences.
#[derive(Debug, Clone)]
pub struct EntanglingLayer {
    arch: LayerArch,
    parameter_ids: Vec<ParameterId>,
}

impl EntanglingLayer {
    /// Build the layer, registering its parameters (initialized to zero)
    pub fn new(arch: LayerArch, registry: &mut ParameterRegistry) -> Self {
        let mut parameter_ids = Vec::with_capacity(arch.num_parameters());
        for block in 0..arch.num_blocks {
            for layer in 0..arch.layers_per_block {
                for wire in 0..arch.num_wires {
                    let id = registry
                        .add_named(format!("theta_b{}_l{}_q{}", block, layer, wire), 0.0);
                    parameter_ids.push(id);
                }
            }
        }
        Self {
            arch,
            parameter_ids,
        }
    }

    /// The layer architecture
    #[inline]
    pub fn arch(&self) -> &LayerArch {
        &self.arch
    }

    /// Ids of this layer's parameters, in registration order
    #[inline]
    pub fn parameter_ids(&self) -> &[ParameterId] {
        &self.parameter_ids
    }

    fn axis_for(layer: usize) -> RotationAxis {
        if layer % 2 == 0 {
            RotationAxis::Y
        } else {
            RotationAxis::Z
        }
    }

    /// Append the variational ops at the registry's current values
    pub fn apply(&self, registry: &ParameterRegistry, program: &mut CircuitProgram) -> Result<()> {
        let mut index = 0;
        for _block in 0..self.arch.num_blocks {
            for layer in 0..self.arch.layers_per_block {
                let axis = Self::axis_for(layer);
                for wire in 0..self.arch.num_wires {
                    let angle = registry.get(self.parameter_ids[index])?.value();
                    program.rotation(axis, wire, angle)?;
                    index += 1;
                }
            }
            // Ring entangler needs at least two wires
            if self.arch.num_wires >= 2 {
                for wire in 0..self.arch.num_wires {
                    program.controlled_not(wire, (wire + 1) % self.arch.num_wires)?;
                }
            }
        }
        Ok(())
    }
}

//! # Program Assembly
//!
//! Turns a resolved layout and the requirements record into the script
//! tree. Emission order is fixed: shell/cavity boolean group, vents, port
//! cutouts, then the mount sub-assembly, then the assembly statements.

use config::constants::EngineConfig;

use mount_collect::{Cooling, MountType, MountingRequirements};
use mount_scad::{ModuleDef, ScadNode, ScadProgram};
use mount_types::{ProductDescriptor, ProductType};

use crate::error::CompileError;
use crate::layout::EnclosureLayout;

const BODY_MODULE: &str = "enclosure_body";
const WALL_MOUNT_MODULE: &str = "wall_mount";

/// Builds the full script tree for a validated descriptor/requirements
/// pair.
pub fn build_program(
    descriptor: &ProductDescriptor,
    requirements: &MountingRequirements,
    engine: &EngineConfig,
) -> Result<ScadProgram, CompileError> {
    check_requirement_compatibility(descriptor, requirements)?;
    let layout = EnclosureLayout::new(&descriptor.dimensions, engine)?;

    let mut modules = vec![ModuleDef {
        name: BODY_MODULE.into(),
        body: body_module(&layout, descriptor, requirements, engine),
    }];
    let mut assembly = vec![BODY_MODULE.to_string()];

    // Only wall mounting produces distinguishing geometry in this version;
    // every other mount type keeps the bare shell.
    if requirements.mount_type == MountType::Wall {
        modules.push(ModuleDef {
            name: WALL_MOUNT_MODULE.into(),
            body: wall_mount_module(&layout),
        });
        assembly.push(WALL_MOUNT_MODULE.to_string());
    }

    Ok(ScadProgram {
        header: Some(format!("Enclosure for {}", descriptor.metadata.name)),
        segments: engine.segments,
        modules,
        assembly,
    })
}

/// Rejects compute-module-only fields on products that never get asked the
/// corresponding questions.
fn check_requirement_compatibility(
    descriptor: &ProductDescriptor,
    requirements: &MountingRequirements,
) -> Result<(), CompileError> {
    if descriptor.product_type == ProductType::ComputeModule {
        return Ok(());
    }
    if requirements.cooling.is_some() {
        return Err(CompileError::IncompatibleRequirements {
            field: "cooling",
            product_type: descriptor.product_type,
        });
    }
    if requirements.accessories.is_some() {
        return Err(CompileError::IncompatibleRequirements {
            field: "accessories",
            product_type: descriptor.product_type,
        });
    }
    Ok(())
}

/// The main body: shell minus cavity, vents, and port cutouts.
fn body_module(
    layout: &EnclosureLayout,
    descriptor: &ProductDescriptor,
    requirements: &MountingRequirements,
    engine: &EngineConfig,
) -> ScadNode {
    let mut children = vec![
        ScadNode::comment("Outer shell", ScadNode::cube(layout.shell.to_array())),
        ScadNode::comment(
            "Inner cavity",
            ScadNode::translate(
                layout.cavity_offset().to_array(),
                ScadNode::cube(layout.cavity.to_array()),
            ),
        ),
    ];

    if requirements.cooling == Some(Cooling::Active) {
        let centers = layout.vent_centers(engine);
        if !centers.is_empty() {
            let holes = centers
                .into_iter()
                .map(|(x, y)| {
                    ScadNode::translate(
                        [x, y, layout.shell.z - layout.wall],
                        ScadNode::cylinder(layout.wall, engine.vent_hole_diameter_mm),
                    )
                })
                .collect();
            children.push(ScadNode::comment("Ventilation holes", ScadNode::union(holes)));
        }
    }

    for port in layout.port_cutouts(&descriptor.metadata) {
        children.push(ScadNode::comment(
            port.label,
            ScadNode::translate(port.offset.to_array(), ScadNode::cube(port.size.to_array())),
        ));
    }

    ScadNode::difference(children)
}

/// The wall-mount tab against the back face, with its fastener bore.
fn wall_mount_module(layout: &EnclosureLayout) -> ScadNode {
    let tab = layout.mount_tab();
    ScadNode::translate(
        tab.offset.to_array(),
        ScadNode::difference(vec![
            ScadNode::cube(tab.size.to_array()),
            ScadNode::comment(
                "Fastener through-hole",
                ScadNode::translate(
                    tab.bore_offset.to_array(),
                    ScadNode::rotate(
                        [90.0, 0.0, 0.0],
                        ScadNode::cylinder(tab.bore_length, tab.bore_diameter),
                    ),
                ),
            ),
        ]),
    )
}

// =============================================================================
// TESTS
// =============================================================================

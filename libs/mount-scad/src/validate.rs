use std::collections::BTreeSet;

use thiserror::Error;

use crate::tree::ScadProgram;

/// Structural defects in an assembled script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The assembly instantiates a module that was never defined.
    #[error("assembly references undefined module: {name}")]
    UndefinedReference {
        /// The missing module name.
        name: String,
    },

    /// Two module definitions share a name.
    #[error("duplicate module definition: {name}")]
    DuplicateModule {
        /// The repeated module name.
        name: String,
    },

    /// The assembly instantiates nothing.
    #[error("assembly is empty")]
    EmptyAssembly,
}

/// Checks that every assembly reference resolves to a uniquely defined
/// module and that the program instantiates at least one.
pub fn validate(program: &ScadProgram) -> Result<(), ScriptError> {
    let mut defined = BTreeSet::new();
    for module in &program.modules {
        if !defined.insert(module.name.as_str()) {
            return Err(ScriptError::DuplicateModule {
                name: module.name.clone(),
            });
        }
    }
    if program.assembly.is_empty() {
        return Err(ScriptError::EmptyAssembly);
    }
    for name in &program.assembly {
        if !defined.contains(name.as_str()) {
            return Err(ScriptError::UndefinedReference { name: name.clone() });
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

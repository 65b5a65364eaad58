//! A converter that applies a finished table.

use flower_ir::{EntityName, ProgramModel, TypeNode, TypeReference};
use flower_rewrite::{flow_name, Converter, FlowName, FlowType, RewriteRule};

use crate::SymbolTable;

/// Translates types of one program, rewriting names as its table says.
///
/// Names without a rule pass through as written. A macro that fails
/// leaves a marker in place of the reference.
pub struct TableConverter<'a, 'r, P: ?Sized> {
    program: &'a P,
    table: &'a SymbolTable<'r>,
}

impl<'a, 'r, P: ProgramModel + ?Sized> TableConverter<'a, 'r, P> {
    pub fn new(program: &'a P, table: &'a SymbolTable<'r>) -> Self {
        TableConverter { program, table }
    }

    fn convert_args(&mut self, args: Option<&[TypeNode]>) -> Option<Vec<FlowType>> {
        args.map(|args| args.iter().map(|arg| self.convert_type(arg)).collect())
    }
}

impl<P: ProgramModel + ?Sized> Converter for TableConverter<'_, '_, P> {
    fn convert_reference(&mut self, reference: &TypeReference) -> FlowType {
        let table = self.table;
        let type_args = reference.type_args.as_deref();
        match table.rule_for_type_reference(self.program, &reference.name) {
            None => FlowType::Generic {
                name: flow_name(&reference.name),
                args: self.convert_args(type_args),
            },
            Some(
                RewriteRule::FixedName { name }
                | RewriteRule::RenameType { name }
                | RewriteRule::SubstituteType { name, .. },
            ) => FlowType::Generic {
                name: FlowName::ident(name.as_str()),
                args: self.convert_args(type_args),
            },
            Some(RewriteRule::TypeReferenceMacro(mac)) => {
                let mac = *mac;
                match mac.expand(self, &reference.name, type_args) {
                    Ok(output) => output.into_type(),
                    Err(error) => {
                        tracing::debug!(name = mac.name, %error, "macro failed");
                        error.to_marker(mac.name)
                    }
                }
            }
        }
    }

    fn convert_entity_name_as_type(&mut self, name: &EntityName) -> FlowName {
        match self
            .table
            .rule_for_type_reference(self.program, name)
            .and_then(RewriteRule::replacement_name)
        {
            Some(replacement) => FlowName::ident(replacement),
            None => flow_name(name),
        }
    }
}

#[cfg(test)]
mod tests;

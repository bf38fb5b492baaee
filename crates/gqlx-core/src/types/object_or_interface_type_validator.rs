use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: HashSet<&'a str>,
    inheritance_path: Vec<&'a str>,
    kind: GraphQLTypeKind,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        kind: GraphQLTypeKind,
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names().into_iter().collect(),
            inheritance_path: vec![],
            kind,
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let mut verified_interface_impls = HashSet::new();
        self.validate_interface_impls(&mut verified_interface_impls);
        self.validate_fields();
        self.errors
    }

    fn validate_interface_impls(&mut self, verified_interface_impls: &mut HashSet<&'a str>) {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        let mut iface_names = self.implemented_iface_names.iter().copied().collect::<Vec<_>>();
        iface_names.sort_unstable();
        for iface_name in iface_names {
            // Interfaces may implement other interfaces, so the same
            // interface can be reached more than once.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }

            let Some(iface_type) = self.types_map.get(iface_name) else {
                self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    type_name: type_name.to_string(),
                    undefined_interface_name: iface_name.to_string(),
                });
                continue;
            };

            let Some(iface) = iface_type.as_interface() else {
                self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: type_name.to_string(),
                    non_interface_type_name: iface_type.name().to_string(),
                });
                continue;
            };

            // The implementing type must also explicitly implement each of
            // the interfaces this interface implements.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            let iface_implemented_iface_names =
                iface.interface_names().into_iter().collect::<HashSet<_>>();
            let mut missing_recursive_interface_names = iface_implemented_iface_names
                .difference(&self.implemented_iface_names)
                .collect::<Vec<_>>();
            missing_recursive_interface_names.sort_unstable();
            for missing_rec_iface_name in missing_recursive_interface_names {
                let mut inheritance_path = self
                    .inheritance_path
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>();
                inheritance_path.push(iface_name.to_string());
                self.errors.push(TypeValidationError::MissingRecursiveInterfaceImplementation {
                    inheritance_path,
                    missing_recursive_interface_name: missing_rec_iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            let mut child_inheritance_path = self.inheritance_path.to_owned();
            child_inheritance_path.push(iface_name);
            let mut child_validator = ObjectOrInterfaceTypeValidator {
                errors: vec![],
                implemented_iface_names: iface_implemented_iface_names,
                inheritance_path: child_inheritance_path,
                kind: self.kind,
                type_: self.type_,
                types_map: self.types_map,
            };
            child_validator.validate_interface_impls(verified_interface_impls);
            self.errors.append(&mut child_validator.errors);

            for (field_name, iface_field) in iface.fields() {
                let Some(type_field) = type_fields.get(field_name) else {
                    self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    });
                    continue;
                };

                let iface_field_params = iface_field.arguments();
                let type_field_params = type_field.arguments();

                // Every interface-declared argument must be declared with
                // the same type on the implementing field.
                for (param_name, iface_field_param) in iface_field_params {
                    let Some(type_param) = type_field_params.get(param_name) else {
                        self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                missing_parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            },
                        );
                        continue;
                    };

                    let iface_param_type = iface_field_param.type_annotation();
                    let type_param_type = type_param.type_annotation();
                    if type_param_type != iface_param_type {
                        self.errors.push(
                            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                                expected_parameter_type: iface_param_type.to_owned(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                invalid_parameter_type: type_param_type.to_owned(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            },
                        );
                    }
                }

                // Arguments the implementing field adds must be optional.
                //
                // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
                for (param_name, param) in type_field_params {
                    if iface_field_params.contains_key(param_name) {
                        continue;
                    }
                    if param.is_required() {
                        self.errors.push(
                            TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            },
                        );
                    }
                }

                let type_field_annot = type_field.type_annotation();
                let iface_field_annot = iface_field.type_annotation();
                if !type_field_annot.is_subtype_of(iface_field_annot, self.types_map) {
                    self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                        expected_field_type: iface_field_annot.to_owned(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        invalid_field_type: type_field_annot.to_owned(),
                        type_name: type_name.to_string(),
                    });
                }
            }
        }
    }

    fn validate_fields(&mut self) {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        if type_fields.is_empty() {
            self.errors.push(TypeValidationError::EmptyFieldSet {
                kind: self.kind,
                type_name: type_name.to_string(),
            });
        }

        for (field_name, field) in type_fields {
            if field_name.starts_with("__") {
                self.errors.push(TypeValidationError::InvalidDunderPrefixedFieldName {
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost_type_name = field.type_annotation().innermost_type_name();
            match self.types_map.get(innermost_type_name) {
                Some(innermost_type) if !innermost_type.is_output_type() => {
                    self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                        field_name: field_name.to_string(),
                        input_type_name: innermost_type_name.to_string(),
                        parent_type_name: type_name.to_string(),
                    });
                },
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }

            for argument_name in &field.duplicate_arguments {
                self.errors.push(TypeValidationError::DuplicateArgumentDefinition {
                    argument_name: argument_name.to_string(),
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            for (param_name, param) in field.arguments() {
                if param_name.starts_with("__") {
                    self.errors.push(TypeValidationError::InvalidDunderPrefixedFieldName {
                        field_name: format!("{field_name}({param_name}:)"),
                        type_name: type_name.to_string(),
                    });
                }

                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost_type_name = param.type_annotation().innermost_type_name();
                match self.types_map.get(innermost_type_name) {
                    Some(innermost_type) if !innermost_type.is_input_type() => {
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputOnlyType {
                                outputonly_type_name: innermost_type_name.to_string(),
                                parameter_name: param_name.to_string(),
                            },
                        );
                    },
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }
    }
}

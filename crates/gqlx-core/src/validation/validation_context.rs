use crate::ast;
use crate::schema::Schema;

/// What a [`ValidationRule`](crate::validation::ValidationRule) gets to look
/// at.
#[derive(Clone, Copy, Debug)]
pub struct ValidationContext<'a> {
    pub schema: &'a Schema,
    pub document: &'a ast::Document,
}
impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self { schema, document }
    }

    /// Every fragment spread in the document, in document order, including
    /// those inside fragment definitions.
    pub fn fragment_spreads(&self) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        for definition in &self.document.definitions {
            let selection_set = match definition {
                ast::Definition::Operation(operation) => &operation.selection_set,
                ast::Definition::Fragment(fragment) => &fragment.selection_set,
            };
            collect_spreads(selection_set, &mut spreads);
        }
        spreads
    }
}

fn collect_spreads<'a>(
    selection_set: &'a ast::SelectionSet,
    spreads: &mut Vec<&'a ast::FragmentSpread>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if let Some(selection_set) = &field.selection_set {
                    collect_spreads(selection_set, spreads);
                }
            },
            ast::Selection::InlineFragment(fragment) => {
                collect_spreads(&fragment.selection_set, spreads);
            },
            ast::Selection::FragmentSpread(spread) => spreads.push(spread),
        }
    }
}

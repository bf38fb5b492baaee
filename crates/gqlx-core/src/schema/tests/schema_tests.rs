use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::types::get_named_type;
use crate::types::is_abstract_type;
use crate::types::is_composite_type;
use crate::types::is_input_type;
use crate::types::is_leaf_type;
use crate::types::is_list_type;
use crate::types::is_non_null_type;
use crate::types::is_object_type;
use crate::types::is_output_type;
use pretty_assertions::assert_eq;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// ```graphql
/// interface Named { name: String }
/// type Person implements Named { name: String }
/// type Pet implements Named { name: String }
/// type Rock { mass: Int }
/// union Thing = Rock | Pet
/// type Query { things: [Thing] }
/// ```
fn schema() -> Result<Schema> {
    let name_field = || Field::new(TypeAnnotation::named("String"));
    let named = InterfaceType::builder("Named")
        .field("name", name_field())
        .resolve_type(|_, _| None)
        .build()?;
    let person = ObjectType::builder("Person")
        .implements("Named")
        .field("name", name_field())
        .build()?;
    let pet = ObjectType::builder("Pet")
        .implements("Named")
        .field("name", name_field())
        .build()?;
    let rock = ObjectType::builder("Rock")
        .field("mass", Field::new(TypeAnnotation::named("Int")))
        .build()?;
    let thing = UnionType::builder("Thing")
        .member("Rock")
        .member("Pet")
        .resolve_type(|_, _| None)
        .build()?;
    let query = ObjectType::builder("Query")
        .field("things", Field::new(TypeAnnotation::list(TypeAnnotation::named("Thing"))))
        .build()?;
    Schema::builder()
        .query(query)
        .add_type(named)
        .add_type(person)
        .add_type(pet)
        .add_type(rock)
        .add_type(thing)
        .build()
}

fn ty(source: &str) -> TypeAnnotation {
    source.parse().expect("valid annotation")
}

fn names(types: &[std::sync::Arc<ObjectType>]) -> Vec<&str> {
    types.iter().map(|t| t.name()).collect()
}

/// Verifies possible types: implementations in definition order for
/// interfaces, declared members for unions.
#[test]
fn possible_types() -> Result<()> {
    let schema = schema()?;
    assert_eq!(names(schema.get_possible_types("Named")), vec!["Person", "Pet"]);
    assert_eq!(names(schema.get_possible_types("Thing")), vec!["Rock", "Pet"]);
    assert!(schema.get_possible_types("Rock").is_empty());
    assert!(schema.is_possible_type("Thing", "Pet"));
    assert!(!schema.is_possible_type("Thing", "Person"));
    Ok(())
}

/// Verifies that meta fields are found where the executor expects them.
#[test]
fn field_definition_lookup() -> Result<()> {
    let schema = schema()?;
    let query = schema.query_type();
    let Some(GraphQLType::Object(rock)) = schema.get_type("Rock") else {
        panic!("Rock should be an object type");
    };
    let type_of = |parent: &ObjectType, name: &str| {
        schema
            .field_definition(parent, name)
            .map(|field| field.type_annotation().to_string())
    };
    assert_eq!(type_of(query, "__schema"), Some("__Schema!".to_string()));
    assert_eq!(type_of(query, "__type"), Some("__Type".to_string()));
    assert_eq!(type_of(rock, "__typename"), Some("String!".to_string()));
    assert_eq!(type_of(rock, "__schema"), None);
    assert_eq!(type_of(rock, "mass"), Some("Int".to_string()));
    assert_eq!(type_of(rock, "volume"), None);
    Ok(())
}

/// Verifies the free-function type predicates.
#[test]
fn type_predicates() -> Result<()> {
    let schema = schema()?;
    assert!(is_abstract_type(&schema, &ty("Named")));
    assert!(is_abstract_type(&schema, &ty("Thing!")));
    assert!(!is_abstract_type(&schema, &ty("[Thing]")));
    assert!(is_object_type(&schema, &ty("Rock")));
    assert!(is_composite_type(&schema, &ty("Thing")));
    assert!(is_leaf_type(&schema, &ty("Int!")));
    assert!(!is_leaf_type(&schema, &ty("Rock")));
    assert!(is_input_type(&schema, &ty("[String!]")));
    assert!(!is_input_type(&schema, &ty("Rock")));
    assert!(is_output_type(&schema, &ty("[Rock!]")));
    assert!(is_output_type(&schema, &ty("Int")));
    assert!(is_list_type(&ty("[Rock]")));
    assert!(is_list_type(&ty("[Rock]!")));
    assert!(is_non_null_type(&ty("Rock!")));
    assert_eq!(
        get_named_type(&schema, &ty("[[Rock!]]")).map(GraphQLType::name),
        Some("Rock"),
    );
    Ok(())
}

/// Verifies subtyping: implementations of an interface, object members of
/// a union, non-null narrowing and lists compared item-wise.
#[test]
fn is_subtype_of() -> Result<()> {
    let schema = schema()?;
    let subtype = |sub: &str, sup: &str| ty(sub).is_subtype_of(&ty(sup), schema.types());

    assert!(subtype("Person", "Named"));
    assert!(subtype("Pet", "Named"));
    assert!(!subtype("Rock", "Named"));
    assert!(!subtype("Named", "Person"));

    assert!(subtype("Pet", "Thing"));
    assert!(subtype("Rock", "Thing"));
    assert!(!subtype("Person", "Thing"));
    assert!(!subtype("Named", "Thing"));

    assert!(subtype("Person!", "Named"));
    assert!(subtype("Person!", "Named!"));
    assert!(!subtype("Person", "Named!"));
    assert!(subtype("[Person!]!", "[Named]"));
    assert!(!subtype("[Person]", "[Named!]"));
    assert!(!subtype("[Person]", "Named"));
    assert!(!subtype("Person", "[Named]"));
    assert!(subtype("String", "String"));
    Ok(())
}

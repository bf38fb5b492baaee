mod object_type_builder_tests;
mod type_annotation_tests;
mod union_type_builder_tests;

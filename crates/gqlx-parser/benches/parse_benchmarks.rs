use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqlx_parser::GraphQLParser;
use gqlx_parser::printer;
use gqlx_parser::token_source::StrGraphQLTokenSource;
use std::fmt::Write;

const SIMPLE_QUERY: &str = "{ hero { name } }";

const COMPLEX_QUERY: &str = r#"
query HeroForEpisode($episode: Episode = JEDI, $withFriends: Boolean!) {
  hero(episode: $episode) {
    __typename
    name
    ... on Droid {
      primaryFunction
    }
    ... on Human @include(if: $withFriends) {
      height(unit: METER)
      friends {
        ...CharacterFields
      }
    }
  }
  search(text: "an \"escaped\" string", filter: {limit: 10, kinds: [HUMAN, DROID]}) {
    ... on Starship { name length }
  }
}

mutation CreateReview($ep: Episode!, $review: ReviewInput!) {
  createReview(episode: $ep, review: $review) {
    stars
    commentary
  }
}

fragment CharacterFields on Character {
  id
  name
  appearsIn
  description: bio(format: """
    A block string
      with indentation
  """)
}
"#;

/// A query whose selection sets nest `depth` levels deep.
fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let _ = writeln!(out, "{indent}child {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// A document containing `count` named queries.
fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!) {{");
        let _ = writeln!(out, "  node(id: $id) {{ id name field{i}: description }}");
        let _ = writeln!(out, "}}\n");
    }
    out
}

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(GraphQLParser::new(SIMPLE_QUERY).parse_executable_document()))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(GraphQLParser::new(COMPLEX_QUERY).parse_executable_document()))
    });

    let nested = deeply_nested_query(30);
    group.bench_function("nested_depth_30", |b| {
        b.iter(|| black_box(GraphQLParser::new(&nested).parse_executable_document()))
    });

    let many_ops = many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(GraphQLParser::new(&many_ops).parse_executable_document()))
    });

    group.finish();
}

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let many_ops = many_operations(50);
    group.throughput(Throughput::Bytes(many_ops.len() as u64));
    group.bench_function("many_operations_50", |b| {
        b.iter(|| {
            for token in StrGraphQLTokenSource::new(&many_ops) {
                black_box(token);
            }
        })
    });

    group.finish();
}

fn print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");

    let doc = gqlx_parser::parse(COMPLEX_QUERY).expect("complex query parses");
    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(printer::print_document(&doc)))
    });

    group.finish();
}

fn compare_executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_executable_parse");

    group.bench_function("gqlx_parser", |b| {
        b.iter(|| black_box(GraphQLParser::new(COMPLEX_QUERY).parse_executable_document()))
    });

    group.bench_function("apollo_parser", |b| {
        b.iter(|| black_box(apollo_parser::Parser::new(COMPLEX_QUERY).parse()))
    });

    group.finish();
}

criterion_group!(
    benches,
    executable_parse,
    lexer,
    print,
    compare_executable_parse,
);
criterion_main!(benches);

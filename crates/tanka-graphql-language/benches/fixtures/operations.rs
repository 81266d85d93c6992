use std::fmt::Write;

/// Generates a query whose selection sets nest `depth` levels deep.
///
/// Each level selects `id` and a `child` field holding the next level.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a document with `count` named query operations.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!) {{");
        let _ = writeln!(out, "  node(id: $id) {{ id name field{i}: description }}");
        let _ = writeln!(out, "}}\n");
    }
    out
}

/// Generates a type-system document with `count` object types.
pub fn many_types(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    for i in 0..count {
        let _ = writeln!(out, "\"Type number {i}.\"");
        let _ = writeln!(out, "type Type{i} implements Node @key(fields: \"id\") {{");
        let _ = writeln!(out, "  id: ID!");
        let _ = writeln!(out, "  items(first: Int = 10): [Type{i}!]!");
        let _ = writeln!(out, "}}\n");
    }
    out
}

//! CPLEX LP text export.

use regcover_core::{ObjectiveSense, SparseModel, VarType};

/// Renders `model` in LP format, naming column `i` with `name_of(i)`.
///
/// Rows are named `c0`, `c1`, ... in model order. Zero objective
/// coefficients are omitted.
pub fn write_lp(model: &SparseModel, name_of: impl Fn(usize) -> String) -> String {
    let mut out = String::new();
    match model.sense() {
        ObjectiveSense::Minimize => out.push_str("Minimize\n obj: "),
        ObjectiveSense::Maximize => out.push_str("Maximize\n obj: "),
    }
    let objective = model
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, column)| column.objective != 0.0)
        .map(|(index, column)| (index, column.objective));
    out.push_str(&fmt_terms(objective, &name_of));
    out.push('\n');

    out.push_str("Subject To\n");
    for (index, row) in model.rows().rows().enumerate() {
        out.push_str(&format!(
            " c{}: {} {} {}\n",
            index,
            fmt_terms(row.entries(), &name_of),
            row.sense.symbol(),
            fmt_num(row.rhs)
        ));
    }

    let bounded: Vec<String> = model
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, column)| column.var_type != VarType::Binary)
        .map(|(index, column)| {
            format!(
                " {} <= {} <= {}\n",
                fmt_bound(column.lower),
                name_of(index),
                fmt_bound(column.upper)
            )
        })
        .collect();
    if !bounded.is_empty() {
        out.push_str("Bounds\n");
        out.push_str(&bounded.concat());
    }

    push_names(&mut out, "General", model, VarType::Integer, &name_of);
    push_names(&mut out, "Binary", model, VarType::Binary, &name_of);
    out.push_str("End\n");
    out
}

fn push_names(
    out: &mut String,
    section: &str,
    model: &SparseModel,
    var_type: VarType,
    name_of: &impl Fn(usize) -> String,
) {
    let names: Vec<String> = model
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, column)| column.var_type == var_type)
        .map(|(index, _)| name_of(index))
        .collect();
    if names.is_empty() {
        return;
    }
    out.push_str(section);
    out.push('\n');
    for name in names {
        out.push_str(&format!(" {}\n", name));
    }
}

fn fmt_num(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.6}", v)
    }
}

fn fmt_bound(v: f64) -> String {
    if v == f64::INFINITY {
        "+inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        fmt_num(v)
    }
}

fn fmt_terms(
    terms: impl Iterator<Item = (usize, f64)>,
    name_of: &impl Fn(usize) -> String,
) -> String {
    let mut parts: Vec<String> = terms
        .map(|(column, c)| {
            if (c - 1.0).abs() < 1e-12 {
                format!("+1 {}", name_of(column))
            } else if (c + 1.0).abs() < 1e-12 {
                format!("-1 {}", name_of(column))
            } else {
                format!("{:+.6} {}", c, name_of(column))
            }
        })
        .collect();
    if parts.is_empty() {
        parts.push("+0".to_string());
    }
    parts.join(" ")
}

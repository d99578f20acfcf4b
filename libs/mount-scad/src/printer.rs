use crate::tree::{ModuleDef, ScadNode, ScadProgram};

const INDENT: &str = "  ";

/// Renders a program to OpenSCAD text in one deterministic pass.
pub fn render(program: &ScadProgram) -> String {
    let mut out = String::new();
    if let Some(header) = &program.header {
        out.push_str(&format!("// {header}\n"));
    }
    out.push_str(&format!("$fn = {};\n", program.segments));
    for module in &program.modules {
        out.push('\n');
        out.push_str(&print_module(module));
    }
    out.push('\n');
    for name in &program.assembly {
        out.push_str(&format!("{name}();\n"));
    }
    out
}

fn print_module(module: &ModuleDef) -> String {
    format!("module {}() {{\n{}}}\n", module.name, print_node(&module.body, 1))
}

fn print_node(node: &ScadNode, depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    match node {
        ScadNode::Cube { size } => format!("{pad}cube({});\n", print_vec3(size)),
        ScadNode::Cylinder { height, diameter } => {
            format!("{pad}cylinder(h={}, d={});\n", print_num(*height), print_num(*diameter))
        }
        ScadNode::Translate { offset, child } => {
            format!("{pad}translate({})\n{}", print_vec3(offset), print_node(child, depth + 1))
        }
        ScadNode::Rotate { degrees, child } => {
            format!("{pad}rotate({})\n{}", print_vec3(degrees), print_node(child, depth + 1))
        }
        ScadNode::Union { children } => print_block("union", children, depth),
        ScadNode::Difference { children } => print_block("difference", children, depth),
        ScadNode::Comment { text, child } => {
            format!("{pad}// {text}\n{}", print_node(child, depth))
        }
    }
}

fn print_block(op: &str, children: &[ScadNode], depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    let body = children.iter().map(|c| print_node(c, depth + 1)).collect::<String>();
    format!("{pad}{op}() {{\n{body}{pad}}}\n")
}

fn print_vec3(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", print_num(v[0]), print_num(v[1]), print_num(v[2]))
}

// Integral values print without a decimal point so scripts stay byte-stable
// across compiles.
fn print_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1.0e12 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================

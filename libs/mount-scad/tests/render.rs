use mount_scad::{render, validate, ModuleDef, ScadNode, ScadProgram};

fn sample_program() -> ScadProgram {
    ScadProgram {
        header: Some("Enclosure for Test Board".into()),
        segments: 50,
        modules: vec![
            ModuleDef {
                name: "enclosure_body".into(),
                body: ScadNode::difference(vec![
                    ScadNode::comment("Outer shell", ScadNode::cube([14.0, 14.0, 14.0])),
                    ScadNode::comment(
                        "Inner cavity",
                        ScadNode::translate([2.0, 2.0, 2.0], ScadNode::cube([10.0, 10.0, 10.0])),
                    ),
                ]),
            },
            ModuleDef {
                name: "wall_mount".into(),
                body: ScadNode::translate(
                    [7.0, 14.0, 0.0],
                    ScadNode::difference(vec![
                        ScadNode::cube([30.0, 20.0, 14.0]),
                        ScadNode::translate(
                            [15.0, 21.0, 7.0],
                            ScadNode::rotate([90.0, 0.0, 0.0], ScadNode::cylinder(22.0, 5.0)),
                        ),
                    ]),
                ),
            },
        ],
        assembly: vec!["enclosure_body".into(), "wall_mount".into()],
    }
}

#[test]
fn renders_full_program() {
    let text = render(&sample_program());
    let expected = "\
// Enclosure for Test Board
$fn = 50;

module enclosure_body() {
  difference() {
    // Outer shell
    cube([14, 14, 14]);
    // Inner cavity
    translate([2, 2, 2])
      cube([10, 10, 10]);
  }
}

module wall_mount() {
  translate([7, 14, 0])
    difference() {
      cube([30, 20, 14]);
      translate([15, 21, 7])
        rotate([90, 0, 0])
          cylinder(h=22, d=5);
    }
}

enclosure_body();
wall_mount();
";
    assert_eq!(text, expected);
}

#[test]
fn rendering_is_deterministic() {
    let program = sample_program();
    assert_eq!(render(&program), render(&program));
}

#[test]
fn modules_render_before_assembly() {
    let program = sample_program();
    validate(&program).unwrap();
    let text = render(&program);
    let def = text.find("module wall_mount()").unwrap();
    let call = text.rfind("wall_mount();").unwrap();
    assert!(def < call);
}

use pavl::avl::write_surface;
use pretty_assertions::assert_eq;

use crate::common::create_two_section_wing;

const SECTION_HEADER: &str = "
#--------------------------------------------------------------
#    Xle         Yle         Zle         chord       ainc
SECTION
";

#[test]
fn test_two_section_wing_block() {
    let mut buffer = Vec::new();
    write_surface(&mut buffer, &create_two_section_wing()).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let control = "CONTROL\n    Wing_aileron_1     1.0     0.750     0.0 1.0 0.0     -1.0\n";
    let expected = [
        "
#
#==============================================================
#
SURFACE
Wing
10  1.0  22  1.0   ! Nchord   Cspace   Nspan  Sspace
#
YDUPLICATE
     0.00000

ANGLE
     0.0000
SCALE
  1.0   1.0   1.0
TRANSLATE
    0.00000     0.00000     0.00000
"
        .to_string(),
        format!(
            "{}    0.00000     0.00000     0.00000     2.00000     0.0000\nNACA\n0012\n",
            SECTION_HEADER
        ),
        format!(
            "{}    0.00000     5.00000     0.00000     1.00000     0.0000\nNACA\n0012\n",
            SECTION_HEADER
        ),
        format!(
            "{}    0.00000     6.00000     0.00000     0.90000     0.0000\nNACA\n0012\n{}",
            SECTION_HEADER, control
        ),
        format!(
            "{}    0.00000     10.00000     0.00000     0.50000     0.0000\nNACA\n0012\n{}",
            SECTION_HEADER, control
        ),
    ]
    .concat();

    assert_eq!(text, expected);
}

#[test]
fn test_section_records_follow_span_order() {
    let mut wing = create_two_section_wing();
    wing.twist = -4.0;
    wing.airfoil = "4415".to_string();

    let mut buffer = Vec::new();
    write_surface(&mut buffer, &wing).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let records: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "SECTION")
        .filter(|line| line.starts_with("    ") && line.split_whitespace().count() == 5)
        .collect();
    assert_eq!(
        records,
        vec![
            "    0.00000     0.00000     0.00000     2.00000     0.0000",
            "    0.00000     5.00000     0.00000     1.00000     -2.0000",
            "    0.00000     6.00000     0.00000     0.90000     -2.4000",
            "    0.00000     10.00000     0.00000     0.50000     -4.0000",
        ]
    );
    assert_eq!(text.matches("\nNACA\n4415\n").count(), 4);
}

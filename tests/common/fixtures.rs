use pavl::components::{ChordSpec, ControlSurface, ControlType, Section, Surface, SweepSpec};

/// Two 5-unit sections, root chord 2.0 and taper 0.5 each, aileron over the outer 40%
pub fn create_two_section_wing() -> Surface {
    Surface::new(
        "Wing",
        vec![
            Section::new(5.0, ChordSpec::RootAndTaper { root: 2.0, taper: 0.5 }),
            Section::new(5.0, ChordSpec::RootAndTaper { root: 1.0, taper: 0.5 }),
        ],
    )
    .with_control(ControlSurface::new(
        "Wing_aileron_1",
        ControlType::Aileron,
        0.75,
        0.6,
        1.0,
    ))
}

/// Single straight, untapered, unswept section
pub fn create_rectangular_wing(span: f64, chord: f64, twist: f64) -> Surface {
    Surface::new(
        "Rect",
        vec![Section::new(span, ChordSpec::RootAndTip { root: chord, tip: chord })],
    )
    .with_twist(twist)
}

/// Cranked wing using every chord and sweep parameterization
pub fn create_cranked_wing() -> Surface {
    Surface::new(
        "Cranked",
        vec![
            Section::new(2.0, ChordSpec::RootAndTip { root: 3.0, tip: 2.4 })
                .with_sweep(SweepSpec::LeadingEdge { angle: 30.0 }),
            Section::new(4.0, ChordSpec::RootAndTaper { root: 2.4, taper: 0.5 })
                .with_sweep(SweepSpec::QuarterChord { angle: 20.0 })
                .with_dihedral(5.0),
            Section::new(1.5, ChordSpec::TipAndTaper { tip: 0.6, taper: 0.5 })
                .with_sweep(SweepSpec::LeadingEdge { angle: 45.0 })
                .with_dihedral(10.0),
        ],
    )
    .with_twist(-3.0)
    .with_control(ControlSurface::new("flap", ControlType::Flap, 0.7, 0.1, 0.5))
    .with_control(ControlSurface::new("aileron", ControlType::Aileron, 0.75, 0.5, 0.9))
}

pub const TRAINER_YAML: &str = r#"
name: Trainer
units: MKS
moment_reference: { x: 0.4 }
surfaces:
  - name: Wing
    twist: -2.0
    airfoil: "2412"
    sections:
      - span: 1.2
        chord: { mode: root_and_tip, root: 1.6, tip: 1.6 }
      - span: 3.8
        chord: { mode: root_and_taper, root: 1.6, taper: 0.625 }
        sweep: { mode: quarter_chord, angle: 2.0 }
        dihedral: 3.0
    controls:
      - { name: flap, control_type: Flap, hinge: 0.75, inboard: 0.0, outboard: 0.45 }
      - { name: aileron, control_type: Aileron, hinge: 0.75, inboard: 0.55, outboard: 0.95 }
  - name: Horizontal Tail
    position: { x: 4.6, z: 0.1 }
    incidence: -1.5
    sections:
      - span: 1.7
        chord: { mode: root_and_taper, root: 1.0, taper: 0.7 }
        sweep: { mode: leading_edge, angle: 8.0 }
    controls:
      - { name: elevator, control_type: Elevator, hinge: 0.7, inboard: 0.0, outboard: 1.0 }
mass:
  - { name: Airframe, mass: 520.0, position: { x: 1.9, z: 0.3 }, ixx: 850.0, iyy: 1100.0, izz: 1800.0 }
  - { name: Pilot, mass: 85.0, position: { x: 1.2, z: 0.5 } }
cases:
  - name: Cruise
    mach: 0.15
    rho: 1.225
    cdo: 0.025
    alpha: { mode: CL, value: 0.4 }
    elevator: { mode: Cm, value: 0.0 }
  - name: Approach
    mach: 0.09
    rho: 1.225
    alpha: { mode: Angle, value: 6.0 }
    flap: 20.0
"#;

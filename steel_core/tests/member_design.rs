//! End-to-end checks through the public API: section capacity, segmentation
//! and a member design file.

use steel_core::codes::DesignCode;
use steel_core::member::{LoadPosition, Member, MomentDiagram, Restraint, RestraintType};
use steel_core::sections::{Axis, Compactness, IGeometry, SectionProperties, SectionShape, SteelSection};
use steel_core::{parse_design_input, CalcError};

fn compact_beam() -> SteelSection {
    SteelSection::new(
        "310UB46.2",
        SectionShape::UniversalBeam(IGeometry::new(307.0, 166.0, 11.8, 6.7, 11.4)),
        SectionProperties {
            area_mm2: 5930.0,
            mass_kgm: Some(46.2),
            ixx_mm4: 99.2e6,
            zxx_mm3: 435e3,
            sxx_mm3: 486e3,
            rx_mm: 129.0,
            iyy_mm4: 9.01e6,
            zyy_mm3: 109e3,
            syy_mm3: 166e3,
            ry_mm: 39.0,
            j_mm4: 233e3,
            iw_mm6: 197e9,
            kf: 1.0,
        },
        300.0,
        300.0,
        DesignCode::as4100_1998(),
    )
}

fn restraints(kinds_and_positions: &[(RestraintType, f64)]) -> Vec<Restraint> {
    kinds_and_positions
        .iter()
        .map(|&(kind, position)| Restraint::new(kind, position).unwrap())
        .collect()
}

#[test]
fn compact_section_capacity() {
    let section = compact_beam();
    assert_eq!(section.classify_bending(Axis::X).compactness, Compactness::Compact);
    assert_eq!(section.classify_bending(Axis::Y).compactness, Compactness::Compact);

    let ms = section.section_moment_capacity(Axis::X);
    assert!((ms - 145.8).abs() < 1e-9, "Ms = {}", ms);
    assert!((section.factored_section_moment_capacity(Axis::X) - 0.9 * 145.8).abs() < 1e-9);
}

#[test]
fn three_restraints_make_two_segments() {
    let section = compact_beam();
    let length = 7500.0;
    let member = Member::new(
        &section,
        length,
        restraints(&[
            (RestraintType::Fixed, 1.0),
            (RestraintType::Lateral, 0.6),
            (RestraintType::Fixed, 0.0),
        ]),
    )
    .unwrap();

    let bmd = MomentDiagram::from_pairs(&[(0.0, 0.0), (0.6, 110.0), (1.0, 0.0)]).unwrap();
    let loads = [LoadPosition::WithinShearCentre, LoadPosition::WithinShearCentre];
    let results = member.calc_phi_mbx(&bmd, &loads, None).unwrap();

    assert_eq!(results.len(), 2);
    assert!((results[0].length_mm - 0.6 * length).abs() < 1e-9);
    assert!((results[1].length_mm - 0.4 * length).abs() < 1e-9);
    assert_eq!(results[0].restraints, "FL");
    assert_eq!(results[1].restraints, "FL");

    // Linear segments peaking at one end
    let alpha_linear = 1.7 / (0.25_f64.powi(2) + 0.5_f64.powi(2) + 0.75_f64.powi(2)).sqrt();
    for segment in &results {
        assert!((segment.alpha_m - alpha_linear).abs() < 1e-9);
        assert_eq!(segment.effective_length_mm, segment.length_mm);
    }
}

#[test]
fn too_few_load_positions_is_an_error() {
    let section = compact_beam();
    let member = Member::new(
        &section,
        6000.0,
        restraints(&[
            (RestraintType::Fixed, 0.0),
            (RestraintType::Lateral, 0.6),
            (RestraintType::Fixed, 1.0),
        ]),
    )
    .unwrap();

    let bmd = MomentDiagram::from_pairs(&[(0.0, 0.0), (1.0, 50.0)]).unwrap();
    let err = member
        .calc_phi_mbx(&bmd, &[LoadPosition::WithinShearCentre], None)
        .unwrap_err();
    assert_eq!(
        err,
        CalcError::ArityMismatch {
            field: "load_positions".to_string(),
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn evaluation_is_repeatable_after_adding_a_restraint() {
    let section = compact_beam();
    let mut member = Member::new(
        &section,
        6000.0,
        restraints(&[(RestraintType::Fixed, 0.0), (RestraintType::Fixed, 1.0)]),
    )
    .unwrap();
    let bmd = MomentDiagram::from_pairs(&[(0.0, 0.0), (0.5, 80.0), (1.0, 0.0)]).unwrap();

    let before = member.calc_phi_mbx(&bmd, &[LoadPosition::WithinTopFlange], None).unwrap();
    assert_eq!(before.len(), 1);

    member
        .add_restraint(Restraint::new(RestraintType::Partial, 0.5).unwrap())
        .unwrap();
    let loads = [LoadPosition::WithinTopFlange; 2];
    let after = member.calc_phi_mbx(&bmd, &loads, None).unwrap();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].restraints, "FP");
    assert!(after[0].k_t > 1.0);
    assert_eq!(member.calc_phi_mbx(&bmd, &loads, None).unwrap(), after);
}

#[test]
fn cantilever_design_file() {
    let json = r#"{
        "version": "0.1.0",
        "label": "cantilever",
        "section": { "designation": "250UB25.7" },
        "length_mm": 3000.0,
        "restraints": [ { "type": "F", "position": 0.0 }, { "type": "U", "position": 1.0 } ],
        "load_positions": ["ET"],
        "moment_diagram": { "samples": [ { "position": 0.0, "moment": -40.0 }, { "position": 1.0, "moment": 0.0 } ] }
    }"#;

    let result = parse_design_input(json).unwrap().evaluate().unwrap();
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].restraints, "FU");
    assert_eq!(result.segments[0].k_l, 2.0);
    assert!((result.segments[0].effective_length_mm - 6000.0).abs() < 1e-9);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["segments"][0]["load_position"], "ET");
    assert_eq!(value["major_axis"]["axis"], "x");
}

//! End-to-end checks of the public engine API.

use approx::assert_relative_eq;

use frame_core::calculations::{AnalysisConfiguration, CrossSectionProfile};
use frame_core::equations::frame::corner_shares;
use frame_core::loads::{FrameSection, Load};
use frame_core::materials::{Material, MaterialProperties};
use frame_core::normalize::normalize_positive;
use frame_core::settings::InputDefaults;
use frame_core::units::ForceUnit;
use frame_core::{compute_diagrams, compute_results, AnalysisInput};

fn rect(width_mm: f64, height_mm: f64) -> CrossSectionProfile {
    CrossSectionProfile::Rectangular { width_mm, height_mm }
}

fn beam(length_mm: f64) -> AnalysisConfiguration {
    AnalysisConfiguration::SimpleBeam {
        length_mm,
        left_support_mm: 0.0,
        right_support_mm: length_mm,
    }
}

#[test]
fn midspan_point_load_on_simple_beam() {
    let defaults = InputDefaults::default();
    for &(length_mm, p) in &[(2000.0, 1000.0), (3000.0, 7500.0), (4500.0, 123.4)] {
        let r = compute_results(
            &beam(length_mm),
            &[Load::point(p, length_mm / 2.0)],
            &[],
            &rect(100.0, 200.0),
            &Material::SteelS235,
            7850.0,
            &defaults,
        );
        let l = length_mm / 1000.0;
        assert_relative_eq!(r.corner_reactions.r1, p / 2.0, max_relative = 1e-12);
        assert_relative_eq!(r.corner_reactions.r2, p / 2.0, max_relative = 1e-12);
        assert_relative_eq!(r.max_bending_moment_nm, p * l / 4.0, max_relative = 1e-12);
    }
}

#[test]
fn full_span_uniform_load_deflection() {
    let defaults = InputDefaults::default();
    let (w, l) = (2500.0_f64, 3.0_f64);
    let profile = CrossSectionProfile::IBeam {
        height_mm: 200.0,
        flange_width_mm: 100.0,
        flange_thickness_mm: 8.5,
        web_thickness_mm: 5.6,
    };
    let r = compute_results(
        &beam(3000.0),
        &[Load::uniform(w, 0.0, 3000.0)],
        &[],
        &profile,
        &Material::SteelS355,
        7850.0,
        &defaults,
    );
    let ei = 210.0e9 * profile.properties().moment_of_inertia_m4;
    assert_relative_eq!(r.max_deflection_m, 5.0 * w * l.powi(4) / (384.0 * ei), max_relative = 1e-12);
    assert_relative_eq!(r.max_bending_moment_nm, w * l * l / 8.0, max_relative = 1e-9);

    // The sampled curve peaks close to the same value at midspan
    let d = compute_diagrams(&beam(3000.0), &[Load::uniform(w, 0.0, 3000.0)], &r, &Material::SteelS355, &defaults);
    let peak = d.deflection.iter().map(|p| p.y).fold(0.0, f64::max);
    assert_relative_eq!(peak, r.max_deflection_m, max_relative = 1e-3);
}

#[test]
fn corner_distribution_conserves_force() {
    let (l, w) = (2.0_f64, 1.0_f64);
    for &(cx, cy) in &[(0.1, 0.1), (1.0, 0.5), (1.99, 0.01), (0.73, 0.42)] {
        let r = corner_shares(1500.0, cx, cy, l, w);
        assert_relative_eq!(r.total(), 1500.0, max_relative = 1e-12);
    }
}

#[test]
fn frame_reactions_sum_to_total_load() {
    let defaults = InputDefaults::default();
    let config = AnalysisConfiguration::BaseFrame {
        length_mm: 2400.0,
        width_mm: 1200.0,
    };
    let loads = [
        Load::point(300.0, 600.0).with_unit(ForceUnit::Kgf),
        Load::uniform(800.0, 200.0, 2200.0),
        Load::distributed(1200.0, 1500.0, 600.0, 400.0),
        Load::distributed_area(1000.0, 100.0, 0.25),
    ];
    let sections = [FrameSection::new("Pump", 1200.0, 2400.0, 40.0, 150.0).with_casing_unit(ForceUnit::Lbf)];
    let r = compute_results(&config, &loads, &sections, &rect(100.0, 218.0), &Material::SteelS235, 7850.0, &defaults);
    assert_relative_eq!(r.corner_reactions.total(), r.total_applied_load_n, max_relative = 1e-12);
    assert_relative_eq!(r.load_per_beam_n, r.total_applied_load_n / 4.0, max_relative = 1e-12);
    assert_eq!(r.total_beams, 4);
}

#[test]
fn normalize_positive_fallbacks() {
    assert_eq!(normalize_positive(f64::NAN, 5.0), 5.0);
    assert_eq!(normalize_positive(-3.0, 5.0), 5.0);
    assert_eq!(normalize_positive(10.0, 5.0), 10.0);
}

#[test]
fn distributed_area_load_force() {
    let r = Load::distributed_area(1000.0, 0.0, 0.25).resolve(&InputDefaults::default());
    assert_relative_eq!(r.total_force(), 250.0, max_relative = 1e-12);
}

#[test]
fn frame_self_weight() {
    let defaults = InputDefaults::default();
    let config = AnalysisConfiguration::BaseFrame {
        length_mm: 2000.0,
        width_mm: 1000.0,
    };
    let r = compute_results(&config, &[], &[], &rect(100.0, 218.0), &Material::SteelS235, 7850.0, &defaults);
    assert_relative_eq!(r.total_applied_load_n, 0.0218 * 6.0 * 7850.0 * 9.81, max_relative = 1e-12);
    assert!((r.total_applied_load_n - 10_070.0).abs() < 5.0);
    assert_relative_eq!(r.corner_reactions.r3, r.total_applied_load_n / 4.0, max_relative = 1e-12);
}

#[test]
fn zero_yield_strength_gives_zero_safety_factor() {
    let defaults = InputDefaults::default();
    let material = Material::Custom(MaterialProperties {
        yield_strength_mpa: 0.0,
        ..Material::SteelS235.properties()
    });
    for config in [
        beam(2000.0),
        AnalysisConfiguration::BaseFrame {
            length_mm: 2000.0,
            width_mm: 1000.0,
        },
    ] {
        let r = compute_results(&config, &[Load::point(5000.0, 700.0)], &[], &rect(100.0, 200.0), &material, 7850.0, &defaults);
        assert!(r.max_normal_stress_mpa > 0.0);
        assert_eq!(r.safety_factor, 0.0);
    }
}

#[test]
fn diagrams_have_one_hundred_points_in_millimeters() {
    let input = AnalysisInput {
        configuration: beam(2500.0),
        loads: vec![Load::point(1000.0, 800.0), Load::uniform(200.0, 1000.0, 2500.0)],
        cross_section: rect(80.0, 160.0),
        ..Default::default()
    };
    let analysis = input.analyze(&InputDefaults::default());
    for curve in [&analysis.diagrams.shear, &analysis.diagrams.moment, &analysis.diagrams.deflection] {
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].x, 0.0);
        assert_relative_eq!(curve[99].x, 2500.0, max_relative = 1e-12);
    }
    // Supports at the ends: moment vanishes at both ends, and the last shear
    // sample has the right reaction subtracted
    let shear = &analysis.diagrams.shear;
    let moment = &analysis.diagrams.moment;
    let r2 = analysis.results.corner_reactions.r2;
    assert_relative_eq!(shear[99].y, -2.0 * r2, max_relative = 1e-9);
    assert!(moment[0].y.abs() < 1e-9);
    assert!(moment[99].y.abs() < 1e-9);
}

#[test]
fn repeated_calls_are_identical() {
    let input = AnalysisInput {
        loads: vec![Load::point(2000.0, 500.0)],
        ..Default::default()
    };
    let defaults = InputDefaults::default();
    assert_eq!(input.analyze(&defaults), input.analyze(&defaults));
}

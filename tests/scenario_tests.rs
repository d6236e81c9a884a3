//! End-to-end scenarios through the public entry points

use ore_blast::sample::generate_csv;
use ore_blast::{
    IngestError, MaterialKind, Session, Settings, Verdict, apply_blast, build_grid_from_text,
    compute_stats, get_block_at, reset_grid,
};

const THREE_BY_ONE: &str = "x,y,ore_type,hardness,value\n0,0,stone,100,1\n1,0,gold,200,50\n2,0,stone,100,1\n";

#[test]
fn test_three_by_one_radius_one() {
    let mut grid = build_grid_from_text(THREE_BY_ONE).unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 1));

    let result = apply_blast(&mut grid, 1, 0, 1, 150.0);
    let gold = get_block_at(&grid, 1, 0).unwrap();
    let expected = 150.0 * (1.0 - MaterialKind::Gold.blast_resistance());
    assert!((gold.damage() - expected).abs() < 1e-4);
    assert_eq!(get_block_at(&grid, 0, 0).unwrap().damage(), 0.0);
    assert_eq!(get_block_at(&grid, 2, 0).unwrap().damage(), 0.0);
    assert_eq!(result.affected.len(), 3);
    assert!(result.destroyed.is_empty());
}

#[test]
fn test_three_by_one_radius_two_destroys_edges() {
    let mut grid = build_grid_from_text(THREE_BY_ONE).unwrap();
    // Edge stone at d=1: 400 * 0.5 * 0.9 = 180 >= 100
    let result = apply_blast(&mut grid, 1, 0, 2, 400.0);
    let mut destroyed: Vec<i32> = result.destroyed.iter().map(|p| p.x).collect();
    destroyed.sort();
    assert_eq!(destroyed, vec![0, 1, 2]);

    let stats = compute_stats(&grid);
    assert_eq!(stats.destroyed_blocks, 3);
    assert_eq!(stats.survival_rate, 0);
    assert!(stats.material_distribution.is_empty());

    let restored = reset_grid(&grid);
    assert_eq!(compute_stats(&restored).survival_rate, 100);
    assert_eq!(restored, build_grid_from_text(THREE_BY_ONE).unwrap());
}

#[test]
fn test_schema_error_lists_found_columns() {
    let err = build_grid_from_text("easting,northing,grade\n1,2,3\n").unwrap_err();
    match err {
        IngestError::Schema(schema) => {
            assert_eq!(schema.found, vec!["easting", "northing", "grade"]);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_sample_session_with_settings() {
    let text = generate_csv(11, 12, 8);
    let mut session = Session::new(&text).unwrap();
    let settings = Settings {
        blast_radius: 3,
        blast_power: 1000.0,
        ..Default::default()
    };

    let result = session.blast(settings.blast_at(glam::IVec2::new(6, 4)));
    assert!(!result.destroyed.is_empty());

    let score = session.score();
    let stats = session.stats();
    assert_eq!(score.mineral_recovery, stats.survival_rate);
    assert_eq!(score.mineral_recovery + score.dilution, 100);

    session.reset();
    assert_eq!(session.score().verdict, Some(Verdict::PerfectBlast));
}

use integration_tests::IntervalMesh;
use permea_core::{Mesh, Value};
use permea_transport::{
    ConfigError, LookupError, boundary_condition::FixedConcentrationBC, config::ModelConfig,
};

const MODEL: &str = r#"{
    "species": [
        { "name": "H" },
        { "name": "D", "mobile": true }
    ],
    "traps": [
        {
            "name": "trap_H",
            "mobile_species": "H",
            "k_0": 1e-16,
            "E_k": 0.39,
            "p_0": 1e13,
            "E_p": 1.2,
            "n": 1e25,
            "volume": 2
        },
        {
            "name": "trap_D",
            "mobile_species": "D",
            "k_0": 1e-16,
            "E_k": 0.39,
            "p_0": 1e13,
            "E_p": 1.5,
            "n": 5e24,
            "volume": 2
        }
    ],
    "surfaces": [{ "id": 1, "x": 0.0 }, { "id": 3 }],
    "volumes": [{ "id": 2, "borders": [0.0, 0.5] }]
}"#;

#[test]
fn json_model_builds_in_declaration_order() {
    let config: ModelConfig = serde_json::from_str(MODEL).unwrap();
    let model = config.build().unwrap();

    let names: Vec<_> = model
        .species
        .iter()
        .map(|species| species.to_string())
        .collect();
    assert_eq!(names, ["H", "D", "trap_H", "trap_D"]);
    assert_eq!(model.implicit_species.len(), 2);
    assert_eq!(
        model.implicit_species[1].others(),
        [model.species[3].clone()]
    );
    assert_eq!(model.reactions[1].to_string(), "D + None <--> trap_D");
}

#[test]
fn subdomains_locate_their_mesh_entities() {
    let config: ModelConfig = serde_json::from_str(MODEL).unwrap();
    let model = config.build().unwrap();
    let mesh = IntervalMesh::new(4, 1.0);

    let volume = model.find_volume(2).unwrap();
    assert_eq!(volume.locate_subdomain_entities(&mesh), vec![0, 1]);

    let all = model.find_surface(3).unwrap();
    assert_eq!(
        all.locate_boundary_facet_indices(&mesh, mesh.facet_dimension()),
        vec![0, 4]
    );

    let bc = FixedConcentrationBC::new(
        model.find_surface(1).unwrap().clone(),
        Value::new(1.0e20),
        model.find_species("H").unwrap().clone(),
    );
    assert_eq!(bc.facets(&mesh), vec![0]);
}

#[test]
fn config_round_trips_through_toml() {
    let config: ModelConfig = serde_json::from_str(MODEL).unwrap();
    let text = toml::to_string(&config).unwrap();
    let parsed: ModelConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn traps_must_reference_declared_entities() {
    let mut config: ModelConfig = serde_json::from_str(MODEL).unwrap();
    config.traps[1].mobile_species = "T".to_string();

    assert_eq!(
        config.build().unwrap_err(),
        ConfigError::Lookup(LookupError::SpeciesNotFound {
            name: "T".to_string()
        })
    );
}

#[test]
fn invalid_densities_are_reported_with_their_trap() {
    let mut config: ModelConfig = serde_json::from_str(MODEL).unwrap();
    config.traps[0].n = f64::NAN;

    assert_eq!(
        config.build().unwrap_err().to_string(),
        "invalid `n` for trap trap_H: must be finite and non-negative"
    );
}

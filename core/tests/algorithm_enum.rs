use roadpath_core::{Algorithm, SearchConfig, SearchError};

#[test]
fn test_algorithm_enum_default() {
    assert_eq!(Algorithm::default(), Algorithm::AStar);
}

#[test]
fn test_algorithm_from_str() {
    assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
    assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
    assert_eq!("a*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
    assert_eq!("AStar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
    assert_eq!("IDA*".parse::<Algorithm>().unwrap(), Algorithm::IdaStar);
    assert_eq!("ida-star".parse::<Algorithm>().unwrap(), Algorithm::IdaStar);
    assert_eq!("dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Ucs);
    assert_eq!(" greedy ".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
    assert_eq!("ids".parse::<Algorithm>().unwrap(), Algorithm::Ids);
}

#[test]
fn test_algorithm_from_description() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.description().parse::<Algorithm>().unwrap(), algorithm);
    }
}

#[test]
fn test_algorithm_from_unknown_name() {
    assert_eq!(
        "bogus".parse::<Algorithm>(),
        Err(SearchError::UnknownAlgorithm("bogus".to_string()))
    );
    assert!("".parse::<Algorithm>().is_err());
}

#[test]
fn test_algorithm_as_str() {
    assert_eq!(Algorithm::Bfs.as_str(), "BFS");
    assert_eq!(Algorithm::AStar.as_str(), "A*");
    assert_eq!(Algorithm::IdaStar.to_string(), "IDA*");
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
    }
}

#[test]
fn test_only_cost_optimal_algorithms_guarantee_optimality() {
    let optimal: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(Algorithm::guarantees_optimal)
        .collect();
    assert_eq!(
        optimal,
        vec![Algorithm::Ucs, Algorithm::AStar, Algorithm::IdaStar]
    );
}

#[test]
fn test_strategy_reports_its_algorithm() {
    let config = SearchConfig::default();
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.strategy(&config).algorithm(), algorithm);
    }
}

#[test]
fn test_algorithm_serde_serialization() {
    let astar_json = serde_json::to_string(&Algorithm::AStar).unwrap();
    let ucs_json = serde_json::to_string(&Algorithm::Ucs).unwrap();

    assert_eq!(astar_json, r#""A*""#);
    assert_eq!(ucs_json, r#""UCS""#);
}

#[test]
fn test_algorithm_serde_deserialization() {
    let ida_star: Algorithm = serde_json::from_str(r#""IDA*""#).unwrap();
    let greedy: Algorithm = serde_json::from_str(r#""Greedy""#).unwrap();

    assert_eq!(ida_star, Algorithm::IdaStar);
    assert_eq!(greedy, Algorithm::Greedy);
}

use crate::{
    error::{Result, SearchError},
    graph::Graph,
};
use unidecode::unidecode;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Resolves a user-typed city name to the graph's spelling.
///
/// An exact name wins. Otherwise names are compared after [`clean_str`]; when
/// several cities normalize the same way, a case-insensitive exact match is
/// preferred, then the alphabetically first.
pub fn find_best_city_match<'g>(query: &str, graph: &'g Graph) -> Result<&'g str> {
    if let Ok(city) = graph.city(query) {
        return Ok(city.name.as_str());
    }

    let cleaned_query = clean_str(query);
    if cleaned_query.is_empty() {
        return Err(SearchError::NodeNotFound(query.to_string()));
    }

    let matches: Vec<&str> = graph
        .get_all_cities()
        .into_iter()
        .filter(|name| clean_str(name) == cleaned_query)
        .collect();

    let trimmed_query = query.trim();
    matches
        .iter()
        .find(|name| name.eq_ignore_ascii_case(trimmed_query))
        .or_else(|| matches.first())
        .copied()
        .ok_or_else(|| SearchError::NodeNotFound(query.to_string()))
}

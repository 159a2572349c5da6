// Búsqueda por palabra clave sobre el catálogo, con los filtros de la página
// de listado (año, categoría, día, créditos) y sugerencia de título cercano.

use log::debug;
use strsim::jaro_winkler;

use crate::catalog::normalize_text;
use crate::models::{Catalog, CourseSection};

/// Similitud mínima para proponer un "¿quiso decir...?".
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Filtros de la búsqueda. Una lista vacía no restringe nada; el filtro de
/// día pasa si ALGÚN slot de la sección cae en un día seleccionado.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub grade_years: Vec<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub days: Vec<char>,
    #[serde(default)]
    pub credits: Vec<u32>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchOutcome<'a> {
    /// Aciertos ordenados por inscritos descendente (orden "인기순", estable).
    pub hits: Vec<&'a CourseSection>,
    /// Título más parecido cuando no hubo aciertos y la consulta no es vacía.
    pub suggestion: Option<String>,
}

fn matches_query(section: &CourseSection, query_lower: &str) -> bool {
    query_lower.is_empty()
        || section.title.to_lowercase().contains(query_lower)
        || section.professor.to_lowercase().contains(query_lower)
}

fn passes_filters(section: &CourseSection, filters: &SearchFilters) -> bool {
    if !filters.grade_years.is_empty()
        && section.grade_year != 0
        && !filters.grade_years.contains(&section.grade_year)
    {
        return false;
    }
    if !filters.categories.is_empty() {
        let ok = filters.categories.iter().any(|c| {
            let norm = normalize_text(c);
            // el checkbox "S/U" filtra por tipo de calificación, no por categoría
            if norm == "SU" {
                section.pass_fail
            } else {
                !norm.is_empty() && section.category.contains(&norm)
            }
        });
        if !ok {
            return false;
        }
    }
    if !filters.days.is_empty()
        && !section.blocks.iter().any(|b| filters.days.contains(&b.day))
    {
        return false;
    }
    if !filters.credits.is_empty() && !filters.credits.contains(&section.credit) {
        return false;
    }
    true
}

/// Busca por subcadena (título o profesor, sin distinguir mayúsculas) y aplica
/// los filtros. Cero aciertos no es un error: se devuelve la lista vacía y, si
/// hay un título suficientemente parecido, una sugerencia.
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    filters: &SearchFilters,
) -> SearchOutcome<'a> {
    let query_lower = query.trim().to_lowercase();
    let mut hits: Vec<&CourseSection> = catalog
        .sections
        .iter()
        .filter(|s| matches_query(s, &query_lower))
        .filter(|s| passes_filters(s, filters))
        .collect();
    hits.sort_by(|a, b| b.enrolled.cmp(&a.enrolled));

    let suggestion = if hits.is_empty() && !query_lower.is_empty() {
        suggest_title(catalog, query)
    } else {
        None
    };
    debug!("búsqueda '{}': {} aciertos", query, hits.len());
    SearchOutcome { hits, suggestion }
}

/// Primera sección cuyo título contiene la consulta (sin distinguir
/// mayúsculas), en orden de catálogo. Resuelve la consulta de similares.
pub fn find_by_title<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a CourseSection> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return None;
    }
    catalog
        .sections
        .iter()
        .find(|s| s.title.to_lowercase().contains(&query_lower))
}

/// Título del catálogo más parecido a la consulta según Jaro-Winkler, si
/// supera el umbral. Empates se resuelven por orden de catálogo.
pub fn suggest_title(catalog: &Catalog, query: &str) -> Option<String> {
    let query_lower = query.trim().to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for section in &catalog.sections {
        let sim = jaro_winkler(&query_lower, &section.title.to_lowercase());
        let better = match best {
            Some((_, b)) => sim > b,
            None => true,
        };
        if better {
            best = Some((section.title.as_str(), sim));
        }
    }
    match best {
        Some((title, sim)) if sim >= SUGGESTION_THRESHOLD => Some(title.to_string()),
        _ => None,
    }
}

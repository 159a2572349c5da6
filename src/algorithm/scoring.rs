// Puntuación de similitud y de "facilidad" de una sección.

use std::collections::BTreeSet;

use crate::models::CourseSection;

/// Token sintético que marca calificación aprobado/reprobado en el conjunto
/// de rasgos; comparte el espacio de tokens con las palabras del título.
const PASS_FAIL_TOKEN: &str = "pass/fail";

/// Conjunto de rasgos de una sección: palabras del título y del profesor en
/// minúsculas, la categoría normalizada y el token S/U si aplica.
pub fn feature_tokens(course: &CourseSection) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in course.title.split_whitespace() {
        tokens.insert(word.to_lowercase());
    }
    for word in course.professor.split_whitespace() {
        tokens.insert(word.to_lowercase());
    }
    if !course.category.is_empty() {
        tokens.insert(course.category.clone());
    }
    if course.pass_fail {
        tokens.insert(PASS_FAIL_TOKEN.to_string());
    }
    tokens
}

/// |A∩B| / |A∪B|; 0 cuando la unión es vacía.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Heurística de facilidad: 0.2 por calificación S/U más hasta 0.2 según qué
/// tan vacía esté la sección (ratio de llenado 0 => +0.2, >=1 => +0).
pub fn ease_score(course: &CourseSection) -> f64 {
    let pf = if course.pass_fail { 0.2 } else { 0.0 };
    pf + (0.2 - course.crowding_ratio() * 0.2).max(0.0)
}

/// Puntaje de un candidato respecto de un curso base:
/// 0.6·jaccard + 0.3·ease(candidato) − 0.2 si repite profesor.
/// La penalización busca variedad: mismo profesor suele ser la misma clase.
pub fn combined_score(base: &CourseSection, candidate: &CourseSection) -> f64 {
    let sim = jaccard(&feature_tokens(base), &feature_tokens(candidate));
    let same_professor =
        !base.professor.is_empty() && base.professor == candidate.professor;
    let penalty = if same_professor { 0.2 } else { 0.0 };
    0.6 * sim + 0.3 * ease_score(candidate) - penalty
}

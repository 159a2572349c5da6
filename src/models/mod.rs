// Estructuras de datos principales del catálogo de secciones

use std::collections::BTreeSet;

/// Clasificación gruesa del campo `이수구분` (tipo de curso), ya normalizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CategoryKind {
    /// Cursos de la carrera (전필, 전선, 전공...)
    Major,
    /// Educación general / electivos culturales (교양)
    Liberal,
    /// Electivos libres (일반선택 / 자유선택)
    GeneralElective,
    Other,
}

impl CategoryKind {
    /// Clasifica una categoría YA normalizada (sin espacios ni `/`, mayúsculas).
    pub fn from_normalized(categoria: &str) -> Self {
        if categoria.contains("교양") {
            CategoryKind::Liberal
        } else if categoria.contains("일선") || categoria.contains("일반선택") || categoria.contains("자유선택") {
            CategoryKind::GeneralElective
        } else if categoria.starts_with('전') {
            CategoryKind::Major
        } else {
            CategoryKind::Other
        }
    }

    /// True para las categorías admitidas en el pool de combinaciones de créditos.
    pub fn is_combinable(&self) -> bool {
        matches!(self, CategoryKind::Liberal | CategoryKind::GeneralElective)
    }
}

/// Bloque de reunión semanal: un día, periodos consecutivos y la sala (si la hay).
/// "월3,4(IT관)" produce un bloque; "월1,3" produce dos (periodos no contiguos).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MeetingBlock {
    pub day: char,
    /// Periodos consecutivos en orden ascendente. Vacío = bloque "día completo"
    /// (la cadena traía el día pero ningún periodo numérico).
    pub periods: Vec<u32>,
    pub room: String,
}

impl MeetingBlock {
    pub fn start_period(&self) -> Option<u32> {
        self.periods.first().copied()
    }

    /// Cantidad de periodos que ocupa el bloque en la grilla (0 = día completo).
    pub fn span(&self) -> u32 {
        self.periods.len() as u32
    }
}

/// Sección de curso ya canónica: ningún componente del motor vuelve a ver
/// las claves crudas del registro original.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CourseSection {
    pub section_id: String,
    pub title: String,
    pub professor: String,
    /// Créditos (esperado 1-6; un valor ilegible queda en 0).
    pub credit: u32,
    /// Categoría normalizada (p. ej. "교양", "전필").
    pub category: String,
    pub category_kind: CategoryKind,
    /// Año de carrera al que apunta la sección; 0 = cualquier año.
    pub grade_year: u32,
    /// Cadena original de "강의실 및 시간". `slots` y `blocks` derivan de ella
    /// una sola vez al construir el snapshot y son función pura de esta cadena.
    pub raw_time: String,
    pub slots: BTreeSet<String>,
    pub blocks: Vec<MeetingBlock>,
    pub capacity: u32,
    pub enrolled: u32,
    pub notes: String,
    /// True si las notas indican calificación S/U (aprobado/reprobado).
    pub pass_fail: bool,
}

impl CourseSection {
    /// enrolled/capacity; si la capacidad es desconocida (0) usamos enrolled
    /// tal cual (caso degenerado documentado: sin denominador no hay ratio real).
    pub fn crowding_ratio(&self) -> f64 {
        if self.capacity > 0 {
            self.enrolled as f64 / self.capacity as f64
        } else {
            self.enrolled as f64
        }
    }
}

/// Snapshot inmutable del catálogo de un semestre. El host no debe mutarlo
/// mientras haya peticiones en vuelo; el motor solo lo lee.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Catalog {
    pub sections: Vec<CourseSection>,
}

/// Conjunto de secciones cuya suma de créditos da exactamente el objetivo
/// pedido, sin títulos repetidos ni choques de horario entre miembros.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Combination {
    pub courses: Vec<CourseSection>,
    pub score: f64,
}

impl Combination {
    pub fn credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credit).sum()
    }

    /// Cantidad de slots distintos que ocupa la combinación completa.
    pub fn distinct_slot_count(&self) -> usize {
        let union: BTreeSet<&String> = self.courses.iter().flat_map(|c| c.slots.iter()).collect();
        union.len()
    }
}

/// Política para horarios que no matchean la gramática esperada.
///
/// El comportamiento original trataba un conjunto de slots vacío como
/// "nunca choca con nada"; la alternativa lo trata como in-agendable.
/// Se expone como opción con nombre en vez de adivinar la intención.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum UnparsedTimePolicy {
    #[default]
    NeverConflicts,
    AlwaysConflicts,
}

/// Parámetros puros del motor. Sin estado global escondido: cada punto de
/// entrada recibe su configuración por argumento.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Tamaño de las listas Popular/Fácil mostradas (N).
    #[serde(default = "default_list_size")]
    pub list_size: usize,
    /// Máximo de resultados de la consulta de similares.
    #[serde(default = "default_similar_cap")]
    pub similar_cap: usize,
    /// Máximo de combinaciones devueltas (K).
    #[serde(default = "default_combo_cap")]
    pub combo_cap: usize,
    /// Rango válido del objetivo de créditos.
    #[serde(default = "default_min_target")]
    pub min_target: u32,
    #[serde(default = "default_max_target")]
    pub max_target: u32,
    /// Tope del pool de candidatos de la búsqueda de combinaciones.
    #[serde(default = "default_pool_cap")]
    pub pool_cap: usize,
    /// Rango de créditos por curso admitido en el pool.
    #[serde(default = "default_pool_credit_min")]
    pub pool_credit_min: u32,
    #[serde(default = "default_pool_credit_max")]
    pub pool_credit_max: u32,
    #[serde(default)]
    pub unparsed_policy: UnparsedTimePolicy,
}

fn default_list_size() -> usize { 5 }
fn default_similar_cap() -> usize { 5 }
fn default_combo_cap() -> usize { 5 }
fn default_min_target() -> u32 { 1 }
fn default_max_target() -> u32 { 30 }
fn default_pool_cap() -> usize { 200 }
fn default_pool_credit_min() -> u32 { 1 }
fn default_pool_credit_max() -> u32 { 4 }

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            list_size: default_list_size(),
            similar_cap: default_similar_cap(),
            combo_cap: default_combo_cap(),
            min_target: default_min_target(),
            max_target: default_max_target(),
            pool_cap: default_pool_cap(),
            pool_credit_min: default_pool_credit_min(),
            pool_credit_max: default_pool_credit_max(),
            unparsed_policy: UnparsedTimePolicy::default(),
        }
    }
}

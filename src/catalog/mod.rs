// Normalización del catálogo crudo a secciones canónicas.
//
// El catálogo de origen viene con variantes accidentales de las mismas claves
// (espacios al inicio, espacios internos eliminados). Todo eso se resuelve en
// una sola pasada al cargar el snapshot; el motor nunca ve claves crudas.

use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::algorithm::timeslot::{parse_blocks, parse_slots};
use crate::models::{Catalog, CategoryKind, CourseSection};

/// Variantes aceptadas de cada campo lógico, en orden de preferencia.
const TITLE_KEYS: &[&str] = &["과목명", " 과목명"];
const PROFESSOR_KEYS: &[&str] = &["담당교수", " 담당교수"];
const TIME_KEYS: &[&str] = &["강의실 및 시간", " 강의실 및 시간", "강의실및시간"];
const CREDIT_KEYS: &[&str] = &["학점", " 학점"];
const CATEGORY_KEYS: &[&str] = &["이수구분", " 이수구분"];
const CAPACITY_KEYS: &[&str] = &["정원", " 정원"];
const ENROLLED_KEYS: &[&str] = &["담은 인원", " 담은 인원", "담은인원"];
const NOTES_KEYS: &[&str] = &["비고", " 비고"];
const GRADE_KEYS: &[&str] = &["학년", " 학년"];
const SECTION_ID_KEYS: &[&str] = &["수강반번호", " 수강반번호"];

/// Errores de la frontera de carga. El motor en sí nunca falla por datos
/// sucios (campo ilegible => valor neutro); solo la carga del fichero puede
/// devolver error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no se pudo leer el catálogo: {0}")]
    Io(#[from] std::io::Error),
    #[error("el catálogo no es JSON válido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("el catálogo debe ser un array JSON de registros")]
    NotAnArray,
}

/// Devuelve el primer valor presente y no nulo entre las variantes de clave,
/// convertido a cadena. Cadena vacía si ninguna variante existe.
pub fn resolve_field(record: &Value, keys: &[&str]) -> String {
    for key in keys {
        match record.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            Some(Value::Bool(b)) => return b.to_string(),
            Some(Value::Null) | None => continue,
            // objetos/arrays no son valores de celda esperables; se ignoran
            Some(_) => continue,
        }
    }
    String::new()
}

/// Quita todo espacio en blanco y los `/`, y pasa a mayúsculas. Sirve para
/// comparar categorías y notas sin depender del formato ("S/U" => "SU").
pub fn normalize_text(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Conserva solo dígitos, `.` y `-` y parsea el resto como f64.
/// Nunca falla: un valor ilegible vale 0 ("3학점" => 3.0, "abc" => 0.0).
pub fn to_number(s: &str) -> f64 {
    let filtered: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    filtered.parse::<f64>().unwrap_or(0.0)
}

fn to_count(s: &str) -> u32 {
    to_number(s).max(0.0) as u32
}

/// True si las notas normalizadas indican calificación aprobado/reprobado.
fn notes_indicate_pass_fail(notes_norm: &str) -> bool {
    notes_norm.contains("SU") || notes_norm.contains("PF") || notes_norm.contains("PASSFAIL")
}

fn section_from_record(record: &Value) -> CourseSection {
    let raw_time = resolve_field(record, TIME_KEYS);
    let category = normalize_text(&resolve_field(record, CATEGORY_KEYS));
    let notes = resolve_field(record, NOTES_KEYS);
    let pass_fail = notes_indicate_pass_fail(&normalize_text(&notes));

    CourseSection {
        section_id: resolve_field(record, SECTION_ID_KEYS).trim().to_string(),
        title: resolve_field(record, TITLE_KEYS).trim().to_string(),
        professor: resolve_field(record, PROFESSOR_KEYS).trim().to_string(),
        credit: to_count(&resolve_field(record, CREDIT_KEYS)),
        category_kind: CategoryKind::from_normalized(&category),
        category,
        grade_year: to_count(&resolve_field(record, GRADE_KEYS)),
        slots: parse_slots(&raw_time),
        blocks: parse_blocks(&raw_time),
        raw_time,
        capacity: to_count(&resolve_field(record, CAPACITY_KEYS)),
        enrolled: to_count(&resolve_field(record, ENROLLED_KEYS)),
        notes,
        pass_fail,
    }
}

impl Catalog {
    /// Construye el snapshot canónico a partir de los registros ya parseados
    /// que entrega el colaborador de carga. Los slots se derivan aquí, una
    /// sola vez por snapshot.
    pub fn from_records(records: &[Value]) -> Catalog {
        let sections: Vec<CourseSection> = records.iter().map(section_from_record).collect();
        let sin_horario = sections.iter().filter(|s| s.slots.is_empty()).count();
        if sin_horario > 0 {
            warn!(
                "{} de {} secciones quedaron sin slots parseables",
                sin_horario,
                sections.len()
            );
        }
        debug!("catálogo normalizado: {} secciones", sections.len());
        Catalog { sections }
    }

    /// Carga un fichero JSON (array de registros con claves originales) y lo
    /// normaliza. Pensado para el CLI de demostración y los tests.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        let records = value.as_array().ok_or(CatalogError::NotAnArray)?;
        Ok(Catalog::from_records(records))
    }
}

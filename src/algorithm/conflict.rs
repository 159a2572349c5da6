// Detección de choques entre conjuntos de slots canónicos.

use std::collections::BTreeSet;

use crate::models::UnparsedTimePolicy;

/// True si los dos conjuntos de slots se intersectan. Un conjunto vacío no
/// choca con nada: es la política por defecto para horarios ilegibles, no un
/// descuido (ver `UnparsedTimePolicy`).
pub fn conflict(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
    a.intersection(b).next().is_some()
}

/// Variante con política explícita. Bajo `AlwaysConflicts` un conjunto vacío
/// se lee como "horario desconocido => in-agendable" y choca con todo.
pub fn conflict_with_policy(
    a: &BTreeSet<String>,
    b: &BTreeSet<String>,
    policy: UnparsedTimePolicy,
) -> bool {
    match policy {
        UnparsedTimePolicy::NeverConflicts => conflict(a, b),
        UnparsedTimePolicy::AlwaysConflicts => a.is_empty() || b.is_empty() || conflict(a, b),
    }
}

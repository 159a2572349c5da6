// Parseo de la cadena "강의실 및 시간" a bloques de reunión y slots canónicos.
//
// Gramática esperada: bloques separados por `/`; cada bloque trae exactamente
// un símbolo de día, periodos ("3,4" o "3-5") y opcionalmente la sala entre
// paréntesis. Ejemplo completo: "월3,4(IT관)/수2(공학관)".

use std::collections::BTreeSet;

use crate::models::MeetingBlock;

/// Los siete símbolos de día de una sola letra.
pub const DAY_SYMBOLS: [char; 7] = ['월', '화', '수', '목', '금', '토', '일'];

/// Periodo máximo plausible en la grilla; números mayores son ruido.
const MAX_PERIOD: u32 = 19;

/// Parsea la cadena cruda a bloques (día, periodos consecutivos, sala).
/// La sala se extrae ANTES de escanear dígitos, de modo que una sala con
/// número ("301호") jamás contamine los periodos. Entrada vacía o sin días
/// reconocibles produce una lista vacía; nunca es un error.
pub fn parse_blocks(raw: &str) -> Vec<MeetingBlock> {
    let mut blocks = Vec::new();
    for segment in raw.split('/') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (rest, room) = extract_room(segment);
        let Some(day) = rest.chars().find(|c| DAY_SYMBOLS.contains(c)) else {
            // segmento sin día reconocible: se descarta (caso ambiguo documentado)
            continue;
        };
        let periods = parse_periods(&rest, day);
        if periods.is_empty() {
            // día sin periodos numéricos: bloque "día completo"
            blocks.push(MeetingBlock { day, periods: Vec::new(), room });
        } else {
            for run in consecutive_runs(&periods) {
                blocks.push(MeetingBlock { day, periods: run, room: room.clone() });
            }
        }
    }
    blocks
}

/// Deriva el conjunto canónico de slots ("월3", "월4", ...) de la cadena
/// cruda. Función pura e idempotente: la misma cadena siempre produce el
/// mismo conjunto. Un bloque "día completo" emite el token del día a solas.
pub fn parse_slots(raw: &str) -> BTreeSet<String> {
    let mut slots = BTreeSet::new();
    for block in parse_blocks(raw) {
        if block.periods.is_empty() {
            slots.insert(block.day.to_string());
        } else {
            for p in &block.periods {
                slots.insert(format!("{}{}", block.day, p));
            }
        }
    }
    slots
}

/// Separa "(sala)" del resto del segmento. Un paréntesis sin cerrar descarta
/// desde `(` en adelante para no leer dígitos de la sala como periodos.
fn extract_room(segment: &str) -> (String, String) {
    if let (Some(a), Some(b)) = (segment.find('('), segment.rfind(')')) {
        if a < b {
            let room = segment[a + 1..b].trim().to_string();
            let rest = format!("{}{}", &segment[..a], &segment[b + 1..]);
            return (rest, room);
        }
    }
    if let Some(a) = segment.find('(') {
        return (segment[..a].to_string(), String::new());
    }
    (segment.to_string(), String::new())
}

/// Extrae los periodos de la parte posterior al símbolo de día.
/// "3,4" => [3,4]; "3-5" => [3,4,5] (límites invertidos se corrigen).
/// Devuelve ordenado y sin duplicados.
fn parse_periods(rest: &str, day: char) -> Vec<u32> {
    let after_day = match rest.find(day) {
        Some(idx) => &rest[idx + day.len_utf8()..],
        None => rest,
    };
    let mut periods: Vec<u32> = Vec::new();
    for token in after_day.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some((lo_str, hi_str)) = token.split_once('-') {
            if let (Some(a), Some(b)) = (digits_of(lo_str), digits_of(hi_str)) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                periods.extend(lo..=hi);
                continue;
            }
        }
        if let Some(n) = digits_of(token) {
            periods.push(n);
        }
    }
    periods.retain(|p| (1..=MAX_PERIOD).contains(p));
    periods.sort_unstable();
    periods.dedup();
    periods
}

/// Número formado por los dígitos del token, o None si no hay ninguno.
fn digits_of(token: &str) -> Option<u32> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() { None } else { digits.parse().ok() }
}

/// Parte una lista ordenada de periodos en corridas consecutivas:
/// [1,2,4] => [[1,2],[4]].
fn consecutive_runs(sorted: &[u32]) -> Vec<Vec<u32>> {
    let mut runs: Vec<Vec<u32>> = Vec::new();
    for &p in sorted {
        match runs.last_mut() {
            Some(run) if run.last().copied() == Some(p - 1) => run.push(p),
            _ => runs.push(vec![p]),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lista_de_periodos() {
        assert_eq!(parse_slots("월3,4"), set(&["월3", "월4"]));
    }

    #[test]
    fn test_rango_de_periodos() {
        assert_eq!(parse_slots("월3-5"), set(&["월3", "월4", "월5"]));
        // límites invertidos
        assert_eq!(parse_slots("월5-3"), set(&["월3", "월4", "월5"]));
    }

    #[test]
    fn test_sala_no_contamina_periodos() {
        assert_eq!(parse_slots("수2(공학관)"), set(&["수2"]));
        // sala con número: "301호" no debe aparecer como periodo
        assert_eq!(parse_slots("화1-3(공학관301호)"), set(&["화1", "화2", "화3"]));
    }

    #[test]
    fn test_varios_bloques() {
        assert_eq!(
            parse_slots("월3,4(IT관)/수2(공학관)"),
            set(&["월3", "월4", "수2"])
        );
    }

    #[test]
    fn test_dia_sin_periodos_es_bloque_completo() {
        assert_eq!(parse_slots("토(체육관)"), set(&["토"]));
    }

    #[test]
    fn test_entrada_vacia_o_ilegible() {
        assert!(parse_slots("").is_empty());
        assert!(parse_slots("시간 미정").is_empty());
    }

    #[test]
    fn test_idempotencia() {
        for raw in ["월3,4", "월3-5", "수2(공학관)", "", "금1,2/금5"] {
            assert_eq!(parse_slots(raw), parse_slots(raw));
        }
    }

    #[test]
    fn test_bloques_con_sala() {
        let blocks = parse_blocks("월3,4(IT관)/수2(공학관)");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].day, '월');
        assert_eq!(blocks[0].periods, vec![3, 4]);
        assert_eq!(blocks[0].room, "IT관");
        assert_eq!(blocks[0].start_period(), Some(3));
        assert_eq!(blocks[0].span(), 2);
        assert_eq!(blocks[1].day, '수');
        assert_eq!(blocks[1].room, "공학관");
    }

    #[test]
    fn test_periodos_no_contiguos_parten_bloque() {
        let blocks = parse_blocks("금1,2,5");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].periods, vec![1, 2]);
        assert_eq!(blocks[1].periods, vec![5]);
    }
}

//! Degrees/minutes/seconds display strings.

/// Format a decimal-degree value as `D° M' S.SSSS" H`.
///
/// The hemisphere letter is `N`/`S` for latitude and `E`/`W` for longitude.
/// Zero (including `-0.0`) counts as positive, so it formats as `N` or `E`.
pub fn to_dms(decimal: f64, is_latitude: bool) -> String {
    let positive = decimal >= 0.0;
    let hemisphere = match (is_latitude, positive) {
        (true, true) => 'N',
        (true, false) => 'S',
        (false, true) => 'E',
        (false, false) => 'W',
    };
    let abs = decimal.abs();
    let degrees = abs.floor();
    let minutes_f = (abs - degrees) * 60.0;
    let minutes = minutes_f.floor();
    let seconds = (minutes_f - minutes) * 60.0;
    format!(
        "{}° {}' {:.4}\" {}",
        degrees as u64, minutes as u64, seconds, hemisphere
    )
}

#[cfg(test)]
mod tests {
    use super::to_dms;

    #[test]
    fn latitude_north() {
        assert_eq!(to_dms(9.3093, true), "9° 18' 33.4800\" N");
    }

    #[test]
    fn longitude_west() {
        assert_eq!(to_dms(-123.308, false), "123° 18' 28.8000\" W");
    }

    #[test]
    fn southern_and_eastern() {
        assert_eq!(to_dms(-0.5, true), "0° 30' 0.0000\" S");
        assert_eq!(to_dms(45.25, false), "45° 15' 0.0000\" E");
    }

    #[test]
    fn zero_counts_as_positive() {
        assert_eq!(to_dms(0.0, true), "0° 0' 0.0000\" N");
        assert_eq!(to_dms(0.0, false), "0° 0' 0.0000\" E");
        assert_eq!(to_dms(-0.0, true), "0° 0' 0.0000\" N");
        assert_eq!(to_dms(-0.0, false), "0° 0' 0.0000\" E");
    }
}

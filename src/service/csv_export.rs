use crate::domain::alert::{Alert, MISSING_FIELD};
use chrono::{DateTime, Utc};

pub const CSV_HEADER: &str = "transaction_id,risk_score,ai_reason,suggested_action,created_at";

/// RFC-4180 rendering of the loaded alert set. Callers pass the unfiltered
/// rows; every field is quoted and internal quotes are doubled. Same rows
/// in, same bytes out.
pub fn render_csv(alerts: &[Alert]) -> String {
    let mut lines = Vec::with_capacity(alerts.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for alert in alerts {
        let fields = [
            alert.display_transaction_id().to_string(),
            alert.display_risk_score(),
            alert.display_reason().to_string(),
            alert.display_action().to_string(),
            alert.created_at.clone().unwrap_or_else(|| MISSING_FIELD.to_string()),
        ];
        let row: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("alerts-{}.csv", now.format("%Y-%m-%dT%H:%M:%S"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn quotes_every_field_and_doubles_inner_quotes() {
        let alerts = vec![Alert {
            transaction_id: Some("tx-1".to_string()),
            risk_score: Some(0.91),
            ai_reason: Some("He said \"hi\"".to_string()),
            suggested_action: Some("BLOCK".to_string()),
            created_at: Some("2026-08-06T10:00:00+00:00".to_string()),
        }];

        let csv = render_csv(&alerts);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("\"tx-1\",\"0.91\",\"He said \"\"hi\"\"\",\"BLOCK\",\"2026-08-06T10:00:00+00:00\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn missing_fields_become_placeholders_not_empty_cells() {
        let csv = render_csv(&[Alert::default()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"—\",\"0.00\",\"—\",\"—\",\"—\"");
    }

    #[test]
    fn repeated_export_is_byte_identical() {
        let alerts = vec![
            Alert {
                transaction_id: Some("tx-1".to_string()),
                risk_score: Some(0.5),
                ai_reason: Some("velocity".to_string()),
                suggested_action: Some("REVIEW".to_string()),
                created_at: Some("2026-08-06T10:00:00+00:00".to_string()),
            },
            Alert::default(),
        ];

        assert_eq!(render_csv(&alerts), render_csv(&alerts));
    }

    #[test]
    fn filename_carries_truncated_iso_timestamp() {
        let stamp = Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 12).unwrap();
        assert_eq!(export_filename(stamp), "alerts-2026-08-06T09:30:12.csv");
    }
}

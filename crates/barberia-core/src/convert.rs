// ── API-to-domain type conversions ──
//
// Bridges raw `barberia_api` wire types into canonical `barberia_core::model`
// domain types. Wire quirks (empty strings for "not set", zone-less
// timestamps, optional embeds) are normalized here and nowhere else.

use barberia_api::models::{AppointmentEntry, BarberEntry, ClientEntry, PartyRef};
use chrono::{DateTime, NaiveDateTime};

use crate::model::{Appointment, AppointmentStatus, Barber, Client, EntityId};

// ── Helpers ──────────────────────────────────────────────────────────

/// Treat blank strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a server timestamp.
///
/// The server sends zone-less local date-times (`2025-03-14T10:00:00`,
/// sometimes with fractional seconds or without seconds). RFC 3339 values
/// are accepted too and reduced to their local wall-clock reading.
pub(crate) fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

fn party(embed: Option<PartyRef>) -> (Option<EntityId>, Option<String>) {
    embed.map_or((None, None), |p| {
        (p.id.map(EntityId::from), non_blank(p.nombre))
    })
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<BarberEntry> for Barber {
    fn from(b: BarberEntry) -> Self {
        Self {
            id: b.id.into(),
            name: b.nombre,
            specialty: non_blank(b.especialidad),
            phone: non_blank(b.telefono),
            active: b.activo,
        }
    }
}

impl From<ClientEntry> for Client {
    fn from(c: ClientEntry) -> Self {
        Self {
            id: c.id.into(),
            name: c.nombre,
            document: c.documento,
            phone: c.telefono,
        }
    }
}

impl From<AppointmentEntry> for Appointment {
    fn from(a: AppointmentEntry) -> Self {
        let (client_id, client_name) = party(a.cliente);
        let (barber_id, barber_name) = party(a.barbero);

        Self {
            id: a.id.into(),
            start: a.fecha_hora_inicio.as_deref().and_then(parse_local_datetime),
            end: a.fecha_hora_fin.as_deref().and_then(parse_local_datetime),
            client_id,
            client_name,
            barber_id,
            barber_name,
            status: a.estado.as_deref().map(AppointmentStatus::from_wire),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use barberia_api::models::ResourceId;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_zone_less_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parse_local_datetime("2025-03-14T10:00:00"), Some(expected));
        assert_eq!(parse_local_datetime("2025-03-14T10:00"), Some(expected));
        assert_eq!(parse_local_datetime("2025-03-14T10:00:00.000"), Some(expected));
        assert_eq!(parse_local_datetime("2025-03-14T10:00:00-05:00"), Some(expected));
        assert_eq!(parse_local_datetime("tomorrow"), None);
    }

    #[test]
    fn barber_blank_optionals_become_none() {
        let barber = Barber::from(BarberEntry {
            id: ResourceId::Number(1),
            nombre: "Luis".into(),
            especialidad: Some(String::new()),
            telefono: Some("  ".into()),
            activo: true,
        });
        assert_eq!(barber.id, EntityId::Numeric(1));
        assert_eq!(barber.specialty, None);
        assert_eq!(barber.phone, None);
        assert!(barber.active);
    }

    #[test]
    fn appointment_without_embeds() {
        let appt = Appointment::from(AppointmentEntry {
            id: ResourceId::Number(7),
            fecha_hora_inicio: Some("garbage".into()),
            fecha_hora_fin: None,
            cliente: None,
            barbero: Some(PartyRef {
                id: Some(ResourceId::Number(2)),
                nombre: None,
            }),
            estado: None,
        });
        assert_eq!(appt.start, None);
        assert_eq!(appt.client_name, None);
        assert_eq!(appt.barber_id, Some(EntityId::Numeric(2)));
        assert_eq!(appt.barber_name, None);
        assert_eq!(appt.status, None);
    }
}

// Barber endpoints
//
// Listing and creating barbers, plus the schedule sub-resource
// (`/barberos/{id}/horarios`), which is write-only from this client.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{BarberEntry, NewBarber, NewScheduleEntry, ResourceId};

const RESOURCE: &str = "barberos";

impl ApiClient {
    /// List all barbers.
    ///
    /// `GET /barberos`
    pub async fn list_barbers(&self) -> Result<Vec<BarberEntry>, Error> {
        let url = self.url(RESOURCE)?;
        debug!("listing barbers");
        self.get_list(url, RESOURCE).await
    }

    /// Create a barber.
    ///
    /// `POST /barberos` with `{nombre, especialidad, telefono}`
    pub async fn create_barber(&self, barber: &NewBarber) -> Result<(), Error> {
        let url = self.url(RESOURCE)?;
        debug!(nombre = %barber.nombre, "creating barber");
        self.post(url, barber).await
    }

    /// Add a weekly working-hours entry to a barber.
    ///
    /// `POST /barberos/{id}/horarios` with `{diaSemana, horaInicio, horaFin}`
    pub async fn add_schedule(
        &self,
        barber_id: &ResourceId,
        entry: &NewScheduleEntry,
    ) -> Result<(), Error> {
        let url = self.url(&format!("{RESOURCE}/{barber_id}/horarios"))?;
        debug!(%barber_id, dia = entry.dia_semana, "adding schedule entry");
        self.post(url, entry).await
    }
}

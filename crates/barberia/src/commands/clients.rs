//! `barberia clients ...`

use std::sync::Arc;

use tabled::Tabled;

use barberia_core::{Client, ClientForm, Controller};

use crate::cli::ClientsCommand;
use crate::error::CliError;
use crate::output::Printer;

use super::util;

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

fn row(client: &Arc<Client>) -> ClientRow {
    ClientRow {
        id: client.id.to_string(),
        name: client.name.clone(),
        document: client.document.clone(),
        phone: client.phone.clone(),
    }
}

pub async fn handle(
    controller: &Controller,
    cmd: ClientsCommand,
    out: &Printer,
) -> Result<(), CliError> {
    match cmd {
        ClientsCommand::List => {
            util::load(controller, out).await;
            out.list(controller.clients_snapshot().as_slice(), row, |c| c.id.to_string())
        }
        ClientsCommand::Create {
            name,
            document,
            phone,
        } => {
            let mut form = ClientForm {
                name,
                document,
                phone,
            };
            let result = controller.submit(&mut form).await;
            util::finish(controller, result, out)
        }
    }
}

//! Console commands and the input state they act on.
//!
//! Each line typed at the prompt is one user action. The console keeps the
//! last values entered for each form, so `delete-reservation` without an id
//! reuses the id of the last lookup, like a form field that stays filled in.

use clap::{Parser, Subcommand};
use hotel_core::{ClientForm, Outcome, ReservationForm, Session, Transport, UreqTransport};

/// One line of console input.
#[derive(Parser, Debug, PartialEq)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

impl Line {
    pub fn parse_line(input: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(input.split_whitespace())
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create a client
    CreateClient {
        nom: String,
        prenom: String,
        email: Option<String>,
        telephone: Option<String>,
    },

    /// List every client
    ListClients,

    /// List every room
    ListRooms,

    /// Create a reservation after checking the client and room exist
    CreateReservation {
        client_id: String,
        chambre_id: String,
        /// First night, YYYY-MM-DD
        date_debut: String,
        /// Departure day, YYYY-MM-DD
        date_fin: String,
        /// Free-text preferences (rest of the line)
        #[arg(trailing_var_arg = true)]
        preferences: Vec<String>,
    },

    /// Show one reservation
    GetReservation { id: Option<String> },

    /// List every reservation
    ListReservations,

    /// Delete a reservation
    DeleteReservation { id: Option<String> },

    /// Print the current result or error again
    Show,

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<T = UreqTransport> {
    session: Session<T>,
    client_form: ClientForm,
    reservation_form: ReservationForm,
    reservation_id: String,
}

impl<T: Transport> Console<T> {
    pub fn new(session: Session<T>) -> Self {
        Self {
            session,
            client_form: ClientForm::default(),
            reservation_form: ReservationForm::default(),
            reservation_id: String::new(),
        }
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    pub fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::CreateClient {
                nom,
                prenom,
                email,
                telephone,
            } => {
                self.client_form = ClientForm {
                    nom,
                    prenom,
                    email: email.unwrap_or_default(),
                    telephone: telephone.unwrap_or_default(),
                };
                self.session.create_client(&self.client_form);
            }
            Command::ListClients => {
                self.session.list_clients();
            }
            Command::ListRooms => {
                self.session.list_rooms();
            }
            Command::CreateReservation {
                client_id,
                chambre_id,
                date_debut,
                date_fin,
                preferences,
            } => {
                self.reservation_form = ReservationForm {
                    client_id,
                    chambre_id,
                    date_debut,
                    date_fin,
                    preferences: preferences.join(" "),
                };
                self.session.create_reservation(&self.reservation_form);
            }
            Command::GetReservation { id } => {
                self.remember(id);
                self.session.get_reservation(&self.reservation_id);
            }
            Command::ListReservations => {
                self.session.list_reservations();
            }
            Command::DeleteReservation { id } => {
                self.remember(id);
                if let Outcome::Done { .. } = self.session.delete_reservation(&self.reservation_id) {
                    self.reservation_id.clear();
                }
            }
            Command::Show => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn remember(&mut self, id: Option<String>) {
        if let Some(id) = id {
            self.reservation_id = id;
        }
    }
}

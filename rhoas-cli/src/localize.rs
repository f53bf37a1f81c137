use std::fmt::{Display, Formatter, Result};

/// User-facing message kinds.
///
/// Commands and errors pick a variant; the text lives only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    NoKafkaSelected,
    Unauthorized { operation: &'a str },
    InternalServerError,
    UnableToConnectToKafka { name: &'a str },
    NoTopics { instance_name: &'a str },
    KafkaSelected { id: &'a str },
    EmptyKafkaId,
    InvalidKafkaId { id: &'a str },
}

impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NoKafkaSelected => write!(
                f,
                "no Kafka instance is currently selected, run \"rhoas kafka use --id <ID>\" to select one"
            ),
            Self::Unauthorized { operation } => {
                write!(f, "you are unauthorized to {operation} these topics")
            }
            Self::InternalServerError => write!(f, "internal server error"),
            Self::UnableToConnectToKafka { name } => {
                write!(f, "unable to connect to Kafka instance \"{name}\"")
            }
            Self::NoTopics { instance_name } => {
                write!(f, "Kafka instance \"{instance_name}\" has no topics")
            }
            Self::KafkaSelected { id } => {
                write!(f, "Kafka instance \"{id}\" selected")
            }
            Self::EmptyKafkaId => write!(f, "Kafka instance ID must not be empty"),
            Self::InvalidKafkaId { id } => write!(
                f,
                "invalid Kafka instance ID \"{id}\", only letters, digits, '-' and '_' are allowed"
            ),
        }
    }
}

/// Connection values needed to open a JDBC-style connection to the configured
/// database: driver identifier, URL and credentials.
///
/// Produced fresh per `configure` call; ownership stays with the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionProperties {
    pub driver: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

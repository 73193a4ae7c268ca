/// Read-only view of the user attributes avatar strategies work from.
///
/// An empty string means the attribute is not available.
pub trait UserIdentity {
    /// Stable identifier, non-empty for any valid user
    fn unique_id(&self) -> &str;

    /// Avatar URL supplied at login, e.g. by an OAuth provider
    fn avatar_url(&self) -> &str;

    fn email(&self) -> &str;
}

use crate::constants::HWID_LENGTH;

/// Generates a random hardware id.
///
/// The id is composed of lowercase hexadecimal digits, like the hardware ids the
/// CloudPlugs server assigns itself when a prototype is enrolled without one.
///
/// # Examples
/// ```
/// use cloudplugs_client::utils::id::get_id;
/// let hwid = get_id();
/// assert_eq!(hwid.len(), 24);
/// ```
pub fn get_id() -> String {
    let alphabet: Vec<char> = "0123456789abcdef".chars().collect();
    nanoid::nanoid!(HWID_LENGTH, &alphabet)
}

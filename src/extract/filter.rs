/// Replaces tabs, carriage returns and line feeds with one space each
///
/// Every other character, including existing spaces, is kept as is.
/// Consecutive spaces are not collapsed, so the output has the same number
/// of characters as the input.
///
/// # Examples
///
/// ```
/// use wordfreq_crawler::extract::filter_text;
///
/// assert_eq!(filter_text("This\tis\ra test \ndata"), "This is a test  data");
/// ```
pub fn filter_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' | '\r' | '\n' => ' ',
            other => other,
        })
        .collect()
}

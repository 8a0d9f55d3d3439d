use hotel_core::DisplayState;

/// Text for the display slots: the error if there is one, otherwise the
/// result headline followed by its pretty-printed payload.
pub fn render(state: &DisplayState) -> String {
    if let Some(err) = &state.last_error {
        return format!("Error\n{err}");
    }
    match &state.last_result {
        Some(shown) => match &shown.data {
            Some(data) => {
                let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
                format!("{}\n{pretty}", shown.message)
            }
            None => shown.message.clone(),
        },
        None => String::new(),
    }
}

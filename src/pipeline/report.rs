use crate::protocol::ResolvedAddress;

/// Render one `Converted URL for ...` line per tunnel, joined by newlines.
///
/// `local_addrs` and `resolved` are index-aligned.
pub fn format_report<S: AsRef<str>>(local_addrs: &[S], resolved: &[ResolvedAddress]) -> String {
    debug_assert_eq!(local_addrs.len(), resolved.len());

    local_addrs
        .iter()
        .zip(resolved)
        .map(|(addr, resolved)| format!("Converted URL for {}: {}", addr.as_ref(), resolved))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build provenance baked in by build.rs.
pub fn report(name: &str) -> String {
    format!(
        "{{ \"name\": \"{}\", \"git_describe\": \"{}\", \"git_hash\": \"{}\" }}",
        name,
        env!("GIT_DESCRIBE"),
        env!("GIT_HASH")
    )
}

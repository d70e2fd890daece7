use vergen::EmitBuilder;

// Emits build and git metadata (VERGEN_*) logged at startup.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .all_build()
        .git_sha(true)
        .emit()?;

    Ok(())
}

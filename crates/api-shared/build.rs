// Compiles cardio.proto into the `pb` module and writes the descriptor set served by gRPC
// reflection. Messages also derive serde and utoipa so REST reuses them as JSON bodies.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let proto_file = manifest_dir.join("cardio.proto");
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    println!("cargo:rerun-if-changed={}", proto_file.display());
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .protoc_arg("--experimental_allow_proto3_optional")
        .type_attribute(
            ".cardio.v1",
            "#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]",
        )
        // Absent JSON keys take the proto3 zero value; unset `optional` fields stay `None`.
        .type_attribute(".cardio.v1", "#[serde(default)]")
        .file_descriptor_set_path(out_dir.join("proto_descriptor.bin"))
        .compile_protos(&[proto_file], &[manifest_dir])?;

    Ok(())
}

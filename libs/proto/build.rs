use std::io::Result;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Supply a protoc binary when the host has none installed, so the build
    // does not depend on a system-wide protobuf-compiler package.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    let proto_root = PathBuf::from("../../api/proto");

    let protos = ["osas/cloudprovider/v1/cloudprovider.proto"];

    let proto_paths: Vec<PathBuf> = protos.iter().map(|p| proto_root.join(p)).collect();

    std::fs::create_dir_all("src/gen")?;

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src/gen")
        .file_descriptor_set_path("src/gen/osas_descriptor.bin")
        .compile_protos(&proto_paths, &[&proto_root])?;

    for proto in &protos {
        println!(
            "cargo:rerun-if-changed={}",
            proto_root.join(proto).display()
        );
    }

    Ok(())
}

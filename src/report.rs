use model::{Model, ObjectKind, Scene};

pub fn print(scene: &Scene, model: &Model) {
    println!("{}", scene.name());
    println!(
        "  pools: {} vertices, {} texture coordinates, {} normals",
        scene.vertices().len(),
        scene.texture_coordinates().len(),
        scene.normals().len(),
    );

    println!("objects ({}):", scene.objects().len());
    for object in scene.objects() {
        let kind = match object.kind() {
            ObjectKind::Object => "o",
            ObjectKind::Group => "g",
        };
        println!(
            "  [{kind}] {}: meshes {:?}, sub-objects {:?}",
            object.name(),
            object.meshes(),
            object.sub_objects(),
        );
    }

    println!("meshes ({}):", scene.meshes().len());
    for (index, mesh) in scene.meshes().iter().enumerate() {
        println!(
            "  #{index}: {} faces, {} indices, material \"{}\"",
            mesh.faces().len(),
            mesh.index_count(),
            scene.mesh_material(mesh).name(),
        );
    }

    println!("groups ({}):", scene.groups().len());
    for group in scene.groups() {
        println!("  {}: {} faces", group.name(), group.faces().len());
    }

    println!("materials ({}):", scene.materials().len());
    for material in scene.materials() {
        println!(
            "  {}: diffuse {:?}, alpha {}, illum {}",
            material.name(),
            material.diffuse,
            material.alpha,
            material.illumination_model.code(),
        );
        for (texture_type, texture) in material.textures() {
            println!("    {texture_type:?}: {}", texture.path.display());
        }
    }

    if !scene.warnings().is_empty() {
        println!("warnings ({}):", scene.warnings().len());
        for warning in scene.warnings() {
            println!("  {warning}");
        }
    }

    println!(
        "model: {} vertices, {} indices, {} triangles, {} submeshes",
        model.vertices().len(),
        model.vertex_indices().len(),
        model.triangle_count(),
        model.submeshes().len(),
    );
}

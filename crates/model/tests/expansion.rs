use std::fs;

use model::{Model, ModelOptions, ObjFile, ObjParser, Triangulation};
use tempfile::TempDir;

const CUBE: &str = "\
mtllib cube.mtl
o cube
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
vn 0 0 -1
usemtl front
f 1/1/1 2/2/1 3/3/1 4/4/1
usemtl back
f 6/1/2 5/2/2 8/3/2 7/4/2
usemtl sides
f 5 1 4 8
f 2 6 7 3
f 4 3 7 8
f 5 6 2 1
";

const CUBE_MTL: &str = "\
newmtl front
Kd 1 0 0
newmtl back
Kd 0 1 0
newmtl sides
Kd 0 0 1
";

#[test]
fn cube_from_obj_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cube.obj"), CUBE).unwrap();
    fs::write(dir.path().join("cube.mtl"), CUBE_MTL).unwrap();

    let path = dir.path().join("cube.obj");
    let path = path.to_string_lossy();
    let model = Model::try_from(ObjFile(&path)).unwrap();

    assert_eq!(model.triangle_count(), 12);
    assert_eq!(model.vertex_indices().len(), 36);
    // The two textured faces have their own corners, the four other faces
    // share positions but not normals.
    assert_eq!(model.vertices().len(), 4 + 4 + 4 * 4);
    assert!(model
        .vertex_indices()
        .iter()
        .all(|&index| (index as usize) < model.vertices().len()));

    let submeshes = model.submeshes();
    // cube's initial mesh, then one per material
    assert_eq!(submeshes.len(), 4);
    assert_eq!(submeshes[0].index_count, 0);
    assert_eq!(
        submeshes.iter().map(|submesh| submesh.index_count).collect::<Vec<_>>(),
        [0, 6, 6, 24]
    );
}

#[test]
fn flat_normals_point_outwards() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cube.obj"), CUBE).unwrap();
    fs::write(dir.path().join("cube.mtl"), CUBE_MTL).unwrap();

    let scene = ObjParser::default()
        .parse_file(dir.path().join("cube.obj"))
        .unwrap();
    let model = Model::from_scene(&scene, &ModelOptions::default()).unwrap();

    let sides = model.submeshes()[3];
    let normals = model
        .submesh_indices(&sides)
        .iter()
        .map(|&index| model.vertices()[index as usize].normal())
        .collect::<Vec<_>>();
    assert_eq!(normals[0], [-1., 0., 0.]);
    assert_eq!(normals[6], [1., 0., 0.]);
    assert_eq!(normals[12], [0., 1., 0.]);
    assert_eq!(normals[18], [0., -1., 0.]);
}

#[test]
fn fan_triangulation_of_a_hexagon() {
    let obj = "v 1 0 0\nv 0.5 0.8 0\nv -0.5 0.8 0\nv -1 0 0\nv -0.5 -0.8 0\nv 0.5 -0.8 0\n\
               f 1 2 3 4 5 6\n";
    let scene = ObjParser::default().parse(obj.as_bytes(), "hexagon").unwrap();

    let dropped = Model::from_scene(&scene, &ModelOptions::default()).unwrap();
    assert_eq!(dropped.triangle_count(), 0);

    let fanned = Model::from_scene(
        &scene,
        &ModelOptions::default().with_triangulation(Triangulation::Fan),
    )
    .unwrap();
    assert_eq!(fanned.triangle_count(), 4);
    assert_eq!(fanned.vertices().len(), 6);
}

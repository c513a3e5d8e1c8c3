use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::math::Affine3A;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;

/// Combined extent of the model hierarchy, with node transforms applied.
///
/// A glTF without nodes falls back to the raw mesh bounds.
pub fn model_extent(
    gltf: &Gltf,
    gltf_nodes: &Assets<GltfNode>,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
) -> Option<Vec3> {
    if gltf.nodes.is_empty() {
        let primitives = gltf
            .meshes
            .iter()
            .filter_map(|handle| gltf_meshes.get(handle))
            .flat_map(|gltf_mesh| gltf_mesh.primitives.iter())
            .filter_map(|primitive| meshes.get(&primitive.mesh))
            .map(|mesh| (mesh, Affine3A::IDENTITY));
        return mesh_extent(primitives);
    }

    let children: HashSet<AssetId<GltfNode>> = gltf
        .nodes
        .iter()
        .filter_map(|handle| gltf_nodes.get(handle))
        .flat_map(|node| node.children.iter().map(|child| child.id()))
        .collect();

    let mut pending: Vec<(&GltfNode, Affine3A)> = gltf
        .nodes
        .iter()
        .filter(|handle| !children.contains(&handle.id()))
        .filter_map(|handle| gltf_nodes.get(handle))
        .map(|node| (node, node.transform.compute_affine()))
        .collect();

    let mut placed = Vec::new();
    while let Some((node, affine)) = pending.pop() {
        if let Some(gltf_mesh) = node.mesh.as_ref().and_then(|handle| gltf_meshes.get(handle)) {
            placed.extend(
                gltf_mesh
                    .primitives
                    .iter()
                    .filter_map(|primitive| meshes.get(&primitive.mesh))
                    .map(|mesh| (mesh, affine)),
            );
        }
        for child in node.children.iter().filter_map(|handle| gltf_nodes.get(handle)) {
            pending.push((child, affine * child.transform.compute_affine()));
        }
    }

    mesh_extent(placed)
}

/// Size of the axis-aligned box enclosing all given meshes, each placed by its transform.
pub fn mesh_extent<'a>(meshes: impl IntoIterator<Item = (&'a Mesh, Affine3A)>) -> Option<Vec3> {
    let mut bounds: Option<(Vec3, Vec3)> = None;

    for (mesh, affine) in meshes {
        let Some(aabb) = mesh.compute_aabb() else {
            continue;
        };
        let (center, half) = (Vec3::from(aabb.center), Vec3::from(aabb.half_extents));

        // All eight corners, since rotation moves the extremes.
        for corner in 0..8 {
            let sign = Vec3::new(
                if corner & 1 == 0 { -1.0 } else { 1.0 },
                if corner & 2 == 0 { -1.0 } else { 1.0 },
                if corner & 4 == 0 { -1.0 } else { 1.0 },
            );
            let point = affine.transform_point3(center + half * sign);
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(point), hi.max(point)),
                None => (point, point),
            });
        }
    }

    bounds.map(|(min, max)| max - min)
}

/// Uniform scale that makes the largest side of `extent` equal `dimension`.
pub fn scale_to_dimension(extent: Vec3, dimension: f32) -> f32 {
    let largest = extent.max_element();
    if largest <= f32::EPSILON {
        return 1.0;
    }
    dimension / largest
}

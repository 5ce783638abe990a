//! Wavefront OBJ export
//!
//! Faces keep their separate position, UV and normal indices, which map
//! directly onto `f v/vt/vn` records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::triangle_mesh::Shading;
use crate::types::GeometryData;

/// Write a capsule to an OBJ file
pub fn write_obj(
    data: &GeometryData,
    path: &Path,
    name: &str,
    shading: Shading,
) -> io::Result<()> {
    let file = File::create(path)?;
    write_obj_to(data, BufWriter::new(file), name, shading)?;
    info!("Wrote {} ({} faces)", path.display(), data.faces().len());
    Ok(())
}

/// Write a capsule as OBJ text to any writer
///
/// `shading` only selects the smoothing group (`s 1` or `s off`); the
/// vertex normals are written either way.
pub fn write_obj_to<W: Write>(
    data: &GeometryData,
    mut out: W,
    name: &str,
    shading: Shading,
) -> io::Result<()> {
    let params = data.params();
    writeln!(out, "# Capsule generated by nether-capsule")?;
    writeln!(
        out,
        "# longitudes={} latitudes={} rings={} depth={} radius={} uv_profile={}",
        params.longitudes,
        params.latitudes,
        params.rings,
        params.depth,
        params.radius,
        params.uv_profile
    )?;
    writeln!(
        out,
        "# {} positions, {} uvs, {} normals, {} faces",
        data.positions().len(),
        data.uvs().len(),
        data.normals().len(),
        data.faces().len()
    )?;
    writeln!(out, "o {}", name)?;

    for p in data.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in data.uvs() {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }
    for n in data.normals() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    match shading {
        Shading::Smooth => writeln!(out, "s 1")?,
        Shading::Flat => writeln!(out, "s off")?,
    }

    // OBJ indices are 1-based
    for face in data.faces() {
        write!(out, "f")?;
        for corner in face.corners() {
            write!(
                out,
                " {}/{}/{}",
                corner.position + 1,
                corner.uv + 1,
                corner.normal + 1
            )?;
        }
        writeln!(out)?;
    }

    out.flush()
}

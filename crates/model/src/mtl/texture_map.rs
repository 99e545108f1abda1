use std::path::Path;

use crate::scene::TextureMap;

/// Parses `[-option args...] file name`. Only `-clamp` is kept, the other
/// options are skipped with their arguments.
pub fn parse_texture_map<'a>(
    components: &mut impl Iterator<Item = &'a str>,
    base_dir: &Path,
) -> Option<TextureMap> {
    let mut components = components.peekable();
    let mut clamp = false;

    while let Some(option) = components.next_if(|str| str.starts_with('-')) {
        match option {
            "-clamp" => {
                clamp = match components.next()? {
                    "on" => true,
                    "off" => false,
                    _ => return None,
                }
            }
            "-blendu" | "-blendv" | "-cc" | "-bm" | "-boost" | "-imfchan" | "-texres"
            | "-type" => {
                components.next()?;
            }
            "-mm" => {
                components.next()?;
                components.next()?;
            }
            // u [v [w]]
            "-o" | "-s" | "-t" => {
                components.next()?.parse::<f32>().ok()?;
                for _ in 0..2 {
                    components.next_if(|str| str.parse::<f32>().is_ok());
                }
            }
            _ => return None,
        }
    }

    let file_name = components.collect::<Vec<_>>().join(" ");
    if file_name.is_empty() {
        return None;
    }
    Some(TextureMap {
        path: base_dir.join(&file_name),
        file_name,
        clamp,
    })
}

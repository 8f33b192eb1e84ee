//! Overlay-Darstellung: Referenzbild als texturiertes Mesh mit Layer-Transform.

use crate::core::{ImageSource, OverlayLayer};
use anyhow::{Context, Result};

/// GPU-Textur des aktuellen Referenzbilds inkl. Quelle (für Cache-Invalidierung).
#[derive(Default)]
pub struct OverlayTexture {
    source: Option<ImageSource>,
    handle: Option<egui::TextureHandle>,
}

impl OverlayTexture {
    /// Erstellt einen leeren Textur-Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt das Bild, falls sich die Quelle geändert hat.
    ///
    /// Ein fehlgeschlagener Ladeversuch wird gemerkt und nicht pro Frame
    /// wiederholt. Der Fehler geht einmalig an den Aufrufer.
    pub fn sync(&mut self, ctx: &egui::Context, source: Option<&ImageSource>) -> Result<()> {
        if self.source.as_ref() == source {
            return Ok(());
        }
        self.source = source.cloned();
        self.handle = None;

        let Some(source) = source else {
            return Ok(());
        };

        let color_image = decode(source)?;
        log::info!(
            "Referenzbild geladen: {} ({}x{})",
            source.display_name(),
            color_image.size[0],
            color_image.size[1]
        );
        self.handle = Some(ctx.load_texture(
            "reference_image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));
        Ok(())
    }

    /// Textur des aktuellen Bilds (None ohne Bild oder nach Ladefehler).
    pub fn handle(&self) -> Option<&egui::TextureHandle> {
        self.handle.as_ref()
    }
}

fn decode(source: &ImageSource) -> Result<egui::ColorImage> {
    let image = image::open(source.uri())
        .with_context(|| format!("Referenzbild konnte nicht geladen werden: {}", source))?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

/// Eckpunkte des transformierten Bild-Rechtecks in Bildschirmkoordinaten.
///
/// Reihenfolge: oben-links, oben-rechts, unten-rechts, unten-links (vor Transform).
/// Spiegelung steckt im Vorzeichen der Layer-Skalierung.
pub fn overlay_quad(
    layer: &OverlayLayer,
    anchor: glam::Vec2,
    half_extent: glam::Vec2,
) -> [glam::Vec2; 4] {
    let affine = layer.affine(anchor);
    [
        glam::Vec2::new(-half_extent.x, -half_extent.y),
        glam::Vec2::new(half_extent.x, -half_extent.y),
        glam::Vec2::new(half_extent.x, half_extent.y),
        glam::Vec2::new(-half_extent.x, half_extent.y),
    ]
    .map(|corner| affine.transform_point2(corner))
}

/// Halbe Ausdehnung des untransformierten Bilds im Viewport.
pub fn base_half_extent(
    viewport_width: f32,
    width_fraction: f32,
    image_size: [f32; 2],
) -> glam::Vec2 {
    let width = viewport_width * width_fraction;
    let aspect = if image_size[0] > 0.0 {
        image_size[1] / image_size[0]
    } else {
        1.0
    };
    glam::Vec2::new(width, width * aspect) * 0.5
}

/// Zeichnet das Overlay in `rect`.
pub fn paint_overlay(
    painter: &egui::Painter,
    rect: egui::Rect,
    texture: &egui::TextureHandle,
    layer: &OverlayLayer,
    width_fraction: f32,
) {
    let size = texture.size_vec2();
    let half_extent = base_half_extent(rect.width(), width_fraction, [size.x, size.y]);
    let anchor = glam::Vec2::new(rect.center().x, rect.center().y);
    let quad = overlay_quad(layer, anchor, half_extent);

    let tint = egui::Color32::WHITE.gamma_multiply(layer.alpha);
    let uvs = [
        egui::pos2(0.0, 0.0),
        egui::pos2(1.0, 0.0),
        egui::pos2(1.0, 1.0),
        egui::pos2(0.0, 1.0),
    ];

    let mut mesh = egui::Mesh::with_texture(texture.id());
    for (corner, uv) in quad.iter().zip(uvs) {
        mesh.vertices.push(egui::epaint::Vertex {
            pos: egui::pos2(corner.x, corner.y),
            uv,
            color: tint,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    painter.add(egui::Shape::mesh(mesh));
}

//! egui panels: body selection, comparison card, details windows and the 2D canvas

use std::collections::{BTreeSet, HashMap};

use egui::{Color32, Context, RichText};
use size_compare::canvas::{self, CanvasCircle};
use size_compare::comparison::{format_radius_km, format_relative_radius};
use size_compare::{Catalog, CelestialBody, Comparison, Rgb, SelectionPair, ViewMode};

/// UI state the panels edit in place
pub struct UiState {
    pub pair: SelectionPair,
    pub mode: ViewMode,
    /// Ids with an open details window
    pub open_details: BTreeSet<String>,
    pub reframe_requested: bool,
}

impl UiState {
    pub fn new(pair: SelectionPair, mode: ViewMode) -> Self {
        Self {
            pair,
            mode,
            open_details: BTreeSet::new(),
            reframe_requested: false,
        }
    }
}

fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Left side panel with the selectors and the comparison card
pub fn draw_selection_panel(
    ctx: &Context,
    catalog: &Catalog,
    state: &mut UiState,
    comparison: &Result<Comparison, String>,
) {
    egui::SidePanel::left("selection_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new("How big is this?").color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                body_selector(ui, "first_body", "First body", catalog, &mut state.pair.first);
                ui.add_space(4.0);
                body_selector(ui, "second_body", "Second body", catalog, &mut state.pair.second);
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    if ui.button("⇄ Swap").clicked() {
                        state.pair = state.pair.swapped();
                    }
                    if ui.button("Reset view").clicked() {
                        state.reframe_requested = true;
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("View:");
                    ui.radio_value(&mut state.mode, ViewMode::Scene3d, ViewMode::Scene3d.label());
                    ui.radio_value(&mut state.mode, ViewMode::Canvas2d, ViewMode::Canvas2d.label());
                });

                ui.separator();

                match comparison {
                    Ok(comparison) => comparison_card(ui, catalog, comparison, &mut state.open_details),
                    Err(e) => {
                        ui.label(RichText::new(e).color(Color32::LIGHT_RED));
                    }
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new("Drag to orbit, scroll to zoom. M: mode, S: swap, R: reset view")
                        .small()
                        .italics(),
                );
            });
        });
}

/// Dropdown grouped by body kind
fn body_selector(ui: &mut egui::Ui, id: &str, label: &str, catalog: &Catalog, selected: &mut String) {
    let selected_text = catalog
        .get(selected)
        .map(|b| b.name.clone())
        .unwrap_or_else(|_| selected.clone());

    ui.label(label);
    egui::ComboBox::from_id_source(id)
        .selected_text(selected_text)
        .width(240.0)
        .show_ui(ui, |ui| {
            for (kind, bodies) in catalog.grouped() {
                ui.label(RichText::new(kind.group_label()).small().color(Color32::GRAY));
                for body in bodies {
                    ui.selectable_value(selected, body.id.clone(), body.name.as_str());
                }
                ui.separator();
            }
        });
}

fn comparison_card(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    comparison: &Comparison,
    open_details: &mut BTreeSet<String>,
) {
    let scaling = &comparison.scaling;
    let ids = [&comparison.pair.first, &comparison.pair.second];
    let display = [scaling.display_radius_a, scaling.display_radius_b];

    for (id, display_radius) in ids.into_iter().zip(display) {
        let Ok(body) = catalog.get(id) else {
            continue;
        };
        ui.group(|ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 7.0, color32(body.color));
                let name = ui.link(RichText::new(&body.name).strong().color(Color32::YELLOW));
                if name.clicked() {
                    open_details.insert(body.id.clone());
                }
            });
            ui.label(format!(
                "Radius: {} ({})",
                format_relative_radius(body.radius, 2),
                format_radius_km(body.radius_km())
            ));
            ui.label(RichText::new(&body.description).small().italics());
            ui.label(RichText::new(format!("Display radius: {:.2} units", display_radius)).small());
        });
        ui.add_space(4.0);
    }

    ui.label(RichText::new(&comparison.summary).strong().color(Color32::LIGHT_GREEN));
    if !scaling.is_proportional() {
        ui.label(
            RichText::new(format!(
                "Sizes adjusted for visibility (true ratio {:.1}:1)",
                scaling.ratio
            ))
            .small()
            .color(Color32::GRAY),
        );
    }
}

/// One window per body in `open_details`; closing a window removes its id
pub fn draw_details_windows(ctx: &Context, catalog: &Catalog, open_details: &mut BTreeSet<String>) {
    let mut closed = Vec::new();

    for id in open_details.iter() {
        let Ok(body) = catalog.get(id) else {
            closed.push(id.clone());
            continue;
        };
        let mut open = true;
        egui::Window::new(body.name.as_str())
            .id(egui::Id::new(("details", &body.id)))
            .open(&mut open)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| details_contents(ui, body));
        if !open {
            closed.push(id.clone());
        }
    }

    for id in closed {
        open_details.remove(&id);
    }
}

fn details_contents(ui: &mut egui::Ui, body: &CelestialBody) {
    let details = &body.details;
    ui.label(RichText::new(&body.description).italics());
    ui.separator();

    egui::Grid::new(("details_grid", &body.id))
        .num_columns(2)
        .spacing([10.0, 4.0])
        .show(ui, |ui| {
            let rows = [
                ("Type", details.classification.clone()),
                ("Radius", format_relative_radius(body.radius, 3)),
                ("", format_radius_km(body.radius_km())),
                ("Mass", details.mass.clone()),
                ("Temperature", details.temperature.clone()),
                ("Age", details.age.clone()),
                ("Composition", details.composition.clone()),
            ];
            for (name, value) in rows {
                ui.label(RichText::new(name).strong());
                ui.label(value);
                ui.end_row();
            }
        });

    ui.separator();
    ui.label(RichText::new("Facts").strong().color(Color32::YELLOW));
    for fact in &details.facts {
        ui.label(format!("• {fact}"));
    }
}

/// Flat 2D view: both bodies as circles, textured once their preview loads
pub fn draw_canvas(
    ctx: &Context,
    catalog: &Catalog,
    comparison: &Result<Comparison, String>,
    textures: &HashMap<String, egui::TextureHandle>,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::BLACK))
        .show(ctx, |ui| {
            let Ok(comparison) = comparison else {
                return;
            };
            let rect = ui.max_rect();
            let layout = match canvas::layout(
                &comparison.scaling,
                rect.width() as f64,
                rect.height() as f64,
            ) {
                Ok(layout) => layout,
                Err(e) => {
                    log::debug!("canvas skipped: {}", e);
                    return;
                }
            };

            let painter = ui.painter();
            let circles = [
                (&comparison.pair.first, layout.first),
                (&comparison.pair.second, layout.second),
            ];
            for (id, circle) in circles {
                let Ok(body) = catalog.get(id) else {
                    continue;
                };
                let center = rect.min + egui::vec2(circle.center[0] as f32, circle.center[1] as f32);
                match textures.get(id.as_str()) {
                    Some(texture) => {
                        painter.add(textured_circle(center, &circle, texture.id()));
                    }
                    None => {
                        painter.circle_filled(center, circle.radius as f32, color32(body.color));
                    }
                }
                painter.text(
                    center + egui::vec2(0.0, circle.radius as f32 + 14.0),
                    egui::Align2::CENTER_CENTER,
                    format!("{}: {}", body.name, format_radius_km(body.radius_km())),
                    egui::FontId::proportional(13.0),
                    Color32::LIGHT_GRAY,
                );
            }
        });
}

/// Triangle fan with the texture mapped onto its bounding square
fn textured_circle(center: egui::Pos2, circle: &CanvasCircle, texture: egui::TextureId) -> egui::Mesh {
    const SEGMENTS: u32 = 64;
    let radius = circle.radius as f32;
    let mut mesh = egui::Mesh::with_texture(texture);

    mesh.vertices.push(egui::epaint::Vertex {
        pos: center,
        uv: egui::pos2(0.5, 0.5),
        color: Color32::WHITE,
    });
    for i in 0..=SEGMENTS {
        let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        mesh.vertices.push(egui::epaint::Vertex {
            pos: center + egui::vec2(cos, sin) * radius,
            uv: egui::pos2(0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
            color: Color32::WHITE,
        });
    }
    for i in 1..=SEGMENTS {
        mesh.add_triangle(0, i, i + 1);
    }

    mesh
}

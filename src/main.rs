use std::path::PathBuf;
use std::sync::Arc;

use battlemat::{
    init_logging, Board, Config, EntityStore, JsonFileStore, PositionSyncer, BUILD_DATE, VERSION,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!(version = VERSION, build = BUILD_DATE, "battlemat starting");

    // Optional config file path on the command line
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from_file(&PathBuf::from(path))?,
        None => Config::load_or_default()?,
    };

    let store = Arc::new(JsonFileStore::new(&config.session.entities_file));
    let records = store.fetch_entities(config.session.user_id).await?;

    let mut board = Board::new(config.grid.to_grid_config())?;
    board.load_records(&records);

    let _syncer = PositionSyncer::new(store);

    tracing::info!(
        tokens = board.tokens().len(),
        width = board.config().width_cells,
        height = board.config().height_cells,
        unit = %board.config().unit,
        "board ready"
    );

    for token in board.tokens().iter() {
        tracing::info!(
            id = token.id,
            name = %token.name,
            position = %token.position,
            cell = %battlemat::cell_label(token.position),
            "token"
        );
    }

    Ok(())
}

//! Full session flow: config file, JSON entity store, board interaction
//! and persistence, wired the same way the binary wires them.

use std::sync::Arc;

use battlemat::{
    Board, Config, EntityStore, GridPoint, JsonFileStore, PixelVec, PositionSyncer,
};
use serde_json::json;

#[tokio::test]
async fn config_store_board_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    // Session config pointing at an entity file in the temp dir
    let entities_path = dir.path().join("entities.json");
    let mut config = Config::default();
    config.session.entities_file = entities_path.clone();
    let config_path = dir.path().join("config.toml");
    config.save_to_file(&config_path).unwrap();
    let config = Config::load_from_file(&config_path).unwrap();

    // Seed the entity file
    std::fs::write(
        &entities_path,
        serde_json::to_string_pretty(&json!([
            { "id_entity": 1, "id_user": 1, "name": "fighter",
              "positionx": 2, "positiony": 2, "size": 1, "speed": 30.0 },
        ]))
        .unwrap(),
    )
    .unwrap();

    // Wire the session like the binary does
    let store = Arc::new(JsonFileStore::new(&config.session.entities_file));
    let records = store.fetch_entities(config.session.user_id).await.unwrap();
    let mut board = Board::new(config.grid.to_grid_config()).unwrap();
    board.load_records(&records);
    let syncer = PositionSyncer::new(store.clone());

    assert_eq!(board.tokens().len(), 1);
    assert_eq!(board.tokens().get(1).unwrap().position, GridPoint::new(2, 2));

    // Drag the token and persist the commit
    board.begin_drag(1).unwrap();
    let commit = board
        .end_drag(PixelVec::new(103.0, -52.0))
        .unwrap()
        .expect("drag moved the token");
    syncer.commit(commit).await.unwrap();

    // A fresh fetch sees the persisted position
    let records = store.fetch_entities(1).await.unwrap();
    assert_eq!(records[0].position(), (4, 1));
}

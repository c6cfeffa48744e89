pub mod video_game;

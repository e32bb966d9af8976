mod username;
